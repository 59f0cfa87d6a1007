pub const DEFAULT_ENV_PREFIX: &str = "APP_";
pub const DEFAULT_ENV_FILE: &str = ".env";
pub const DEFAULT_DATABASE_URL: &str = "sqlite:///data/app.db";
pub const DEFAULT_DEBUG: bool = false;
