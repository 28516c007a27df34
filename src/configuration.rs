use secrecy::Secret;
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> String {
        match self {
            Environment::Local => String::from("local"),
            Environment::Production => String::from("production"),
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "production" => Ok(Environment::Production),
            other => Err(format!(
                r#"{} is not a supported environment.
            Use either 'local or 'production'."#,
                other
            )),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub email: EmailSettings,
    pub ledger: LedgerSettings,
    pub rate_limit: RateLimitSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
    /// Public site URL, used for the links embedded in outgoing emails.
    pub base_url: String,
    /// Root domain under which customer storefronts are provisioned.
    pub store_domain: String,
}

#[derive(Debug, Deserialize)]
pub struct EmailSettings {
    pub sender_name: String,
    pub waitlist_sender: String,
    pub lifetime_sender: String,
    pub lead_notify: String,
    pub checkout_notify: String,
    pub onboarding_notify: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
    /// Absent credentials degrade every email dispatcher to a logged no-op.
    pub smtp: Option<SmtpSettings>,
}

impl EmailSettings {
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_milliseconds)
    }

    pub fn waitlist_from(&self) -> String {
        format!("{} <{}>", self.sender_name, self.waitlist_sender)
    }

    pub fn lifetime_from(&self) -> String {
        format!("{} <{}>", self.sender_name, self.lifetime_sender)
    }

    pub fn founders_from(&self) -> String {
        format!("{} Founders <{}>", self.sender_name, self.lifetime_sender)
    }
}

#[derive(Debug, Deserialize)]
pub struct SmtpSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub username: String,
    pub password: Secret<String>,
}

#[derive(Debug, Deserialize)]
pub struct LedgerSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
    pub lead_webhook_url: Option<String>,
    pub checkout_webhook_url: Option<String>,
    pub waitlist_onboarding_webhook_url: Option<String>,
}

impl LedgerSettings {
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_milliseconds)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct RateLimitSettings {
    pub cooldown_seconds: i64,
    pub sweep_threshold: usize,
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine current directory");
    let config_dir = base_path.join("configuration");

    let environment: Environment = std::env::var("APP_ENV")
        .unwrap_or_else(|_| "local".into())
        // try to convert the "local" String into an Environment::Local enum
        .try_into()
        .expect("Failed to parse APP_ENV");

    let environment_file = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(config_dir.join("base.yaml")))
        .add_source(config::File::from(config_dir.join(environment_file)))
        // e.g. APP_EMAIL__SMTP__PASSWORD overrides email.smtp.password
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
