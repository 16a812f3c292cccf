// src/config/consts.rs

// Data
pub const DEFAULT_DATA_FILE: &str = "assets/current_results.csv";
pub const DATA_ATTRIBUTION: &str =
    "Based off of file: http://www.usaclimbing.org/Assets/Regional+Ranking-Preliminary-201220d.pdf (as of 1/5/2021)";

// Remote fetch
pub const HTTP_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = "qe_compare/0.3";

// Local state
pub const STORE_DIR: &str = ".qe_compare";
pub const LOG_FILE: &str = "debug.log";

// Query
pub const DEFAULT_SCORE: i32 = 2000;
pub const SCORE_STEP: i32 = 50;
pub const HISTOGRAM_BIN_WIDTH: i32 = 200;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "placements";
pub const PLACEMENT_HEADERS: [&str; 4] = ["Region", "Category", "Place", "Number of Climbers"];

// GUI
pub const WINDOW_TITLE: &str = "USAC Virtual QE Climbing Analysis";
pub const REFERENCE_LABEL: &str = "Your Climber's Score";
pub const BG_COLOR: [u8; 3] = [0xf2, 0xf2, 0xf2];
