use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Operating system family reported for a node.
///
/// The family decides which management actions exist for the node at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Darwin,
    Windows,
    Ubuntu,
    Rhel,
    /// Any other Linux distribution the agent reports (debian, centos, ...).
    Linux,
    Chrome,
    Ios,
    Ipados,
    Unknown,
}

/// Platform strings the server reports for Linux distributions other than
/// ubuntu and rhel.
const OTHER_LINUX_PLATFORMS: &[&str] = &[
    "linux",
    "debian",
    "centos",
    "sles",
    "kali",
    "gentoo",
    "amzn",
    "pop",
    "arch",
    "linuxmint",
    "void",
    "nixos",
    "endeavouros",
    "manjaro",
    "opensuse-leap",
    "opensuse-tumbleweed",
    "tuxedo",
    "neon",
    "archarm",
];

impl Platform {
    pub const ALL: [Platform; 9] = [
        Platform::Darwin,
        Platform::Windows,
        Platform::Ubuntu,
        Platform::Rhel,
        Platform::Linux,
        Platform::Chrome,
        Platform::Ios,
        Platform::Ipados,
        Platform::Unknown,
    ];

    /// Maps the platform string the server reports. Anything unrecognized is
    /// `Unknown`, which no platform-specific action accepts.
    pub fn from_api(value: &str) -> Self {
        match value {
            "darwin" => Platform::Darwin,
            "windows" => Platform::Windows,
            "ubuntu" => Platform::Ubuntu,
            "rhel" => Platform::Rhel,
            "chrome" => Platform::Chrome,
            "ios" => Platform::Ios,
            "ipados" => Platform::Ipados,
            other if OTHER_LINUX_PLATFORMS.contains(&other) => Platform::Linux,
            _ => Platform::Unknown,
        }
    }

    pub fn is_linux_like(self) -> bool {
        matches!(self, Platform::Ubuntu | Platform::Rhel | Platform::Linux)
    }

    /// Mobile Apple devices. These only support MDM-driven actions.
    pub fn is_ios_or_ipados(self) -> bool {
        matches!(self, Platform::Ios | Platform::Ipados)
    }

    pub fn is_apple(self) -> bool {
        matches!(self, Platform::Darwin | Platform::Ios | Platform::Ipados)
    }

    /// Platforms whose agent can execute scripts.
    pub fn supports_scripts(self) -> bool {
        matches!(self, Platform::Darwin | Platform::Windows) || self.is_linux_like()
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Darwin => write!(f, "darwin"),
            Platform::Windows => write!(f, "windows"),
            Platform::Ubuntu => write!(f, "ubuntu"),
            Platform::Rhel => write!(f, "rhel"),
            Platform::Linux => write!(f, "linux"),
            Platform::Chrome => write!(f, "chrome"),
            Platform::Ios => write!(f, "ios"),
            Platform::Ipados => write!(f, "ipados"),
            Platform::Unknown => write!(f, "unknown"),
        }
    }
}
