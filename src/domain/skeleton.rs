//! Layout of the extracted application skeleton and the settings written into it.

use serde_json::{Value, json};

use super::ConfigurationPatch;

pub const MANIFEST_FILE: &str = "composer.json";
pub const LOCK_FILE: &str = "composer.lock";
pub const ENV_FILE: &str = ".env";
pub const ENV_TEMPLATE_FILE: &str = ".env.example";
pub const COMPOSER_PHAR: &str = "composer.phar";

/// Directories the application writes to at runtime.
pub const WRITABLE_DIRS: [&str; 2] = ["bootstrap/cache", "storage"];
/// Owner and group may write; everyone may read and traverse.
pub const WRITABLE_MODE: u32 = 0o775;

pub const ARCHIVE_PREFIX: &str = "larapress_";

pub const MAIL_MAILER: &str = "log";

/// Database credentials collected from the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatabaseCredentials {
    pub database: String,
    pub username: String,
    pub password: String,
}

/// `https://<name>.dev` for the project directory's base name.
pub fn app_url(project_name: &str) -> String {
    format!("https://{project_name}.dev")
}

/// Environment keys written into the live `.env`.
pub fn env_patch(project_name: &str, credentials: &DatabaseCredentials) -> ConfigurationPatch {
    ConfigurationPatch::<String>::new()
        .with("APP_URL", app_url(project_name))
        .with("DB_DATABASE", credentials.database.as_str())
        .with("DB_USERNAME", credentials.username.as_str())
        .with("DB_PASSWORD", credentials.password.as_str())
        .with("MAIL_MAILER", MAIL_MAILER)
}

/// Manifest sections registering the framework, the embedded CMS and their packages.
pub fn manifest_patch() -> ConfigurationPatch<ConfigurationPatch<Value>> {
    let extra = ConfigurationPatch::<Value>::new()
        .with(
            "installer-paths",
            json!({ "public/content/mu-plugins/{$name}/": ["larapress/framework"] }),
        )
        .with("wordpress-install-dir", "public/cms")
        .with("include_files", json!(["public/cms/wp-includes/l10n.php"]));

    let require = ConfigurationPatch::<Value>::new()
        .with("lara-press/framework", "~7.0")
        .with("johnpbloch/wordpress", "~5.4")
        .with("funkjedi/composer-include-files", "^1.0");

    ConfigurationPatch::<ConfigurationPatch<Value>>::new()
        .with("extra", extra)
        .with("require", require)
}
