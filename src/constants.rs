pub const FPS: u32 = 60;                      // Target frames per second
pub const WINDOWED_WIDTH: i32 = 960;          // Window size when not fullscreen
pub const WINDOWED_HEIGHT: i32 = 540;

pub const IDLE_PERIOD: f32 = 5.0;             // Time each idle image stays up (seconds)
pub const DIALOG_PERIOD: f32 = 20.0;          // Time a dialog stays up before idle cycling resumes (seconds)
pub const SLIDE_IN_DURATION: f32 = 2.0;       // Idle image slide-in animation (seconds)
pub const SLIDE_UP_DURATION: f32 = 0.8;       // Dialog slide-up animation (seconds)

pub const BEAM_POLL_INTERVAL_MS: u64 = 2000;  // Sleep between break-beam draws
pub const BEAM_MAX_VALUE: u32 = 100;          // Draws are in 1..=BEAM_MAX_VALUE
pub const BEAM_TRIGGER_MODULUS: u32 = 11;     // A draw divisible by this counts as a detection

pub const DEFAULT_BIN_TYPE_FILE: &str = "binType.txt";
pub const DEFAULT_IMAGES_ROOT: &str = "images";
pub const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];
