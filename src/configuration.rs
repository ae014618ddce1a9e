use serde_aux::field_attributes::deserialize_number_from_string;

use crate::subscription_client::SubscriptionClient;

#[derive(Clone, serde::Deserialize)]
pub struct Settings {
    pub newsletter: NewsletterSettings,
}

#[derive(Clone, serde::Deserialize)]
pub struct NewsletterSettings {
    pub endpoint_url: String,
    // The upstream service specifies no bound, so we pick our own
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
}

impl NewsletterSettings {
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_milliseconds)
    }

    pub fn client(self) -> SubscriptionClient {
        let timeout = self.timeout();
        SubscriptionClient::new(self.endpoint_url, timeout)
    }
}

pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either 'development' or 'production'.",
                other
            )),
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine cwd.");
    let configuration_path = base_path.join("configuration");

    let environment: Environment = std::env::var("APP_ENV")
        .unwrap_or_else(|_| "development".into())
        .try_into()
        .expect("Failed to parse APP_ENV.");

    let base_configuration_file = configuration_path.join("base.yaml");
    let env_configuration_file = configuration_path.join(format!("{}.yaml", environment.as_str()));

    let settings = config::Config::builder()
        .add_source(config::File::from(base_configuration_file))
        .add_source(config::File::from(env_configuration_file))
        .build()?;

    settings.try_deserialize::<Settings>()
}
