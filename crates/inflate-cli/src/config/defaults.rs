/// Built-in values used when neither the command line nor the config file sets an option.
pub struct DefaultsConfig {
    pub decimals: Option<usize>,
    pub show_progress: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            decimals: None,
            show_progress: true,
        }
    }
}
