#[cfg(test)]
mod tests {
    use ponto::libs::config::{Config, ConfigError, KioskConfig, PayConfig, ShiftConfig, CONFIG_FILE_NAME};
    use ponto::libs::data_storage::DataStorage;
    use ponto::libs::shift::EntryPolicy;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        temp_dir: TempDir,
    }

    impl ConfigTestContext {
        fn storage(&self) -> DataStorage {
            DataStorage::at(self.temp_dir.path().join("data"))
        }
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            ConfigTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_defaults_without_file(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.storage()).unwrap();

        let pay = config.pay();
        assert_eq!(pay.normal_rate, 8.15);
        assert_eq!(pay.extra_rate, 16.30);
        assert_eq!(pay.normal_hours, 8.0);
        assert_eq!(config.kiosk().admin_pin, "0000");
        assert_eq!(config.kiosk().poll_interval, 30);
        assert_eq!(config.entry_policy(), EntryPolicy::Merge);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read(ctx: &mut ConfigTestContext) {
        let config = Config {
            pay: Some(PayConfig {
                normal_rate: 10.0,
                extra_rate: 15.0,
                normal_hours: 6.0,
            }),
            kiosk: Some(KioskConfig {
                admin_pin: "9876".to_string(),
                poll_interval: 5,
            }),
            shift: Some(ShiftConfig {
                entry_policy: EntryPolicy::Split,
            }),
        };
        config.save_to(&ctx.storage()).unwrap();

        let loaded = Config::read_from(&ctx.storage()).unwrap();
        assert_eq!(loaded.pay(), config.pay());
        assert_eq!(loaded.kiosk().admin_pin, "9876");
        assert_eq!(loaded.entry_policy(), EntryPolicy::Split);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_negative_normal_hours_are_rejected(ctx: &mut ConfigTestContext) {
        let storage = ctx.storage();
        std::fs::write(
            storage.get_path(CONFIG_FILE_NAME).unwrap(),
            r#"{"pay":{"normal_rate":8.15,"extra_rate":16.30,"normal_hours":-2.0}}"#,
        )
        .unwrap();

        let err = Config::read_from(&storage).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::InvalidPayValue {
                field: "normal_hours",
                value: -2.0
            })
        );
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_negative_rate_is_rejected(ctx: &mut ConfigTestContext) {
        let storage = ctx.storage();
        std::fs::write(
            storage.get_path(CONFIG_FILE_NAME).unwrap(),
            r#"{"pay":{"normal_rate":-1.0,"extra_rate":16.30,"normal_hours":8.0}}"#,
        )
        .unwrap();

        assert!(Config::read_from(&storage).is_err());
    }
}
