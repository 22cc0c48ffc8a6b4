use crate::mail::MailAddress;
use dotenv::dotenv;
use std::env;

/// Which mail transport the server should use. `Smtp` talks to a real relay,
/// `Memory` records messages in-process and logs a preview line per message
/// (useful in development, where no relay is reachable).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MailDriver {
    Smtp,
    Memory,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub max_connections: u32,
    /// Base URL of the frontend; confirmation redirects land on
    /// `{web_base_url}/trips/{trip_id}`.
    pub web_base_url: String,
    /// Base URL of this API; confirmation links inside emails point here.
    pub api_base_url: String,
    pub mail_driver: MailDriver,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: Option<String>,
    pub smtp_password: Option<String>,
    pub mail_from_name: String,
    pub mail_from_address: String,
    pub app_env: String,
}

impl Config {
    /// Loads the configuration from environment variables.
    /// Calls dotenv() automatically.
    pub fn from_env() -> Result<Self, String> {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| "DATABASE_URL must be set in .env file".to_string())?;

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3333".to_string())
            .parse::<u16>()
            .map_err(|_| "Invalid SERVER_PORT: must be a number between 0-65535".to_string())?;

        let max_connections = env::var("MAX_DB_CONNECTIONS")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u32>()
            .map_err(|_| "Invalid MAX_DB_CONNECTIONS: must be a positive number".to_string())?;

        let web_base_url =
            env::var("WEB_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());

        let api_base_url =
            env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:3333".to_string());

        let mail_driver = match env::var("MAIL_DRIVER")
            .unwrap_or_else(|_| "memory".to_string())
            .as_str()
        {
            "smtp" => MailDriver::Smtp,
            "memory" => MailDriver::Memory,
            other => {
                return Err(format!(
                    "Invalid MAIL_DRIVER '{other}': must be 'smtp' or 'memory'"
                ));
            }
        };

        let smtp_host = env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string());

        let smtp_port = env::var("SMTP_PORT")
            .unwrap_or_else(|_| "587".to_string())
            .parse::<u16>()
            .map_err(|_| "Invalid SMTP_PORT: must be a number between 0-65535".to_string())?;

        let smtp_username = env::var("SMTP_USERNAME").ok();
        let smtp_password = env::var("SMTP_PASSWORD").ok();

        let mail_from_name =
            env::var("MAIL_FROM_NAME").unwrap_or_else(|_| "Planner Crew".to_string());

        let mail_from_address =
            env::var("MAIL_FROM_ADDRESS").unwrap_or_else(|_| "hello@planner.dev".to_string());

        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        Ok(Config {
            database_url,
            server_host,
            server_port,
            max_connections,
            web_base_url,
            api_base_url,
            mail_driver,
            smtp_host,
            smtp_port,
            smtp_username,
            smtp_password,
            mail_from_name,
            mail_from_address,
            app_env,
        })
    }

    /// The fixed sender identity used on every outgoing message.
    pub fn mail_sender(&self) -> MailAddress {
        MailAddress::new(self.mail_from_name.clone(), self.mail_from_address.clone())
    }

    /// Prints the configuration (hiding secrets).
    pub fn print_info(&self) {
        println!("   Server Configuration:");
        println!("   Environment: {}", self.app_env);
        println!("   Server Address: {}:{}", self.server_host, self.server_port);
        println!("   Database: {}", Self::mask_url(&self.database_url));
        println!("   Max DB Connections: {}", self.max_connections);
        println!("   Web Base URL: {}", self.web_base_url);
        println!("   API Base URL: {}", self.api_base_url);
        println!("   Mail Driver: {:?}", self.mail_driver);
        println!(
            "   Mail Sender: {} <{}>",
            self.mail_from_name, self.mail_from_address
        );
        if self.mail_driver == MailDriver::Smtp {
            println!("   SMTP Relay: {}:{}", self.smtp_host, self.smtp_port);
            println!(
                "   SMTP Auth: {}",
                if self.smtp_username.is_some() {
                    "✓ credentials configured"
                } else {
                    "none"
                }
            );
        }
    }

    /// Masks credentials embedded in a URL for logging.
    fn mask_url(url: &str) -> String {
        if let Some(at_pos) = url.find('@') {
            if let Some(scheme_end) = url.find("://") {
                let scheme = &url[..scheme_end + 3];
                let after_at = &url[at_pos..];
                return format!("{}***{}", scheme, after_at);
            }
        }
        url.to_string()
    }
}
