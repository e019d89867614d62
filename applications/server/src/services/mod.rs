/// Server services
pub mod scanner;

pub use scanner::{DiscoveredVideo, ScanReport, VideoScanner};
