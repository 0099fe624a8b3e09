// src/config/consts.rs

// Input
pub const DEFAULT_INPUT: &str = "webpage.html";

// Statistics
pub const TARGET_COLOR: &str = "RED";

// Local store
pub const STORE_DIR: &str = ".store";
pub const STORE_FILE: &str = "colors.csv";
pub const STORE_SEP: char = ',';
pub const LOG_FILE: &str = "debug.log";

// Database (overridable via environment)
pub const DB_TABLE: &str = "colors";
pub const DEFAULT_DB_NAME: &str = "colors";
pub const DEFAULT_DB_USER: &str = "user";
pub const DEFAULT_DB_PASSWORD: &str = "db_password";
pub const DEFAULT_DB_HOST: &str = "localhost";
pub const DEFAULT_DB_PORT: u16 = 5432;

// GUI
pub const WINDOW_W: f32 = 720.0;
pub const WINDOW_H: f32 = 560.0;
