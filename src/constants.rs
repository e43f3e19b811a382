// FILES
pub const CONFIG_FILE_PATH: &str = "data/config.toml";
pub const DEFAULT_TARGETS_FILE_PATH: &str = "aidrop-targets";
pub const DEFAULT_OUTPUT_FILE_PATH: &str = "airdrop_pairs.json";

// LOGS
pub const LOGS_DIR: &str = "logs";
pub const LOG_FILE_NAME: &str = "airdrop-pairs.log";

// "0x"
pub const ADDRESS_PREFIX_LEN: usize = 2;
