//! Discovery of the standard library include directories of the host SDK.
//!
//! Discovery only looks at what is installed on the host: Linux multiarch
//! directories, the Xcode SDK reported by `xcrun`, and the Windows 10 Kits
//! `ucrt` headers. Directories that do not exist are skipped with a warning.

use std::path::{Path, PathBuf};
use std::process::Command;

use cast_core::{Architecture, OperatingSystem, TargetPlatform};
use tracing::{debug, warn};

/// Directories passed as `-isystem` and `-F` arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemIncludes {
    pub include_directories: Vec<PathBuf>,
    pub framework_directories: Vec<PathBuf>,
}

/// Find the system include directories for `target_platform` on this host.
pub fn discover(target_platform: &TargetPlatform, apple_frameworks: &[String]) -> SystemIncludes {
    let host = OperatingSystem::host();
    let target = target_platform.operating_system();

    let candidates = match (host, target) {
        (OperatingSystem::Linux, _) => SystemIncludes {
            include_directories: linux_directories(Architecture::host(), target_platform.architecture()),
            framework_directories: Vec::new(),
        },
        (OperatingSystem::MacOs, target) if target.is_apple() => apple_directories(target, apple_frameworks),
        (OperatingSystem::Windows, OperatingSystem::Windows) => SystemIncludes {
            include_directories: windows_directories(Path::new(WINDOWS_KITS_INCLUDE)),
            framework_directories: Vec::new(),
        },
        (host, target) => {
            warn!(%host, %target, "system includes: no discovery for this host and target combination");
            SystemIncludes::default()
        }
    };

    SystemIncludes {
        include_directories: existing(candidates.include_directories),
        framework_directories: existing(candidates.framework_directories),
    }
}

fn existing(directories: Vec<PathBuf>) -> Vec<PathBuf> {
    directories
        .into_iter()
        .filter(|dir| {
            let found = dir.is_dir();
            if found {
                debug!(path = %dir.display(), "system includes: found");
            } else {
                warn!(path = %dir.display(), "system includes: directory does not exist");
            }
            found
        })
        .collect()
}

// ── Linux ────────────────────────────────────────────────────────────

/// Debian multiarch tuple for an architecture.
fn multiarch_tuple(architecture: Architecture) -> Option<String> {
    match architecture {
        Architecture::Arm32 => Some("arm-linux-gnueabihf".to_string()),
        other => other.multiarch_name().map(|name| format!("{name}-linux-gnu")),
    }
}

/// Native headers live under `/usr/include/<tuple>`, cross headers under
/// `/usr/<tuple>/include`.
pub(crate) fn linux_directories(host: Architecture, target: Architecture) -> Vec<PathBuf> {
    let Some(tuple) = multiarch_tuple(target) else {
        warn!(?target, "system includes: unknown target architecture");
        return Vec::new();
    };

    if host == target {
        vec![PathBuf::from("/usr/include").join(tuple)]
    } else {
        vec![PathBuf::from("/usr").join(tuple).join("include")]
    }
}

// ── Apple ────────────────────────────────────────────────────────────

fn apple_directories(target: OperatingSystem, apple_frameworks: &[String]) -> SystemIncludes {
    let sdk = if target == OperatingSystem::Ios { "iphoneos" } else { "macosx" };
    let Some(sdk_path) = xcrun_sdk_path(sdk) else {
        return SystemIncludes::default();
    };

    let mut includes = SystemIncludes {
        include_directories: vec![sdk_path.join("usr/include")],
        framework_directories: Vec::new(),
    };

    if !apple_frameworks.is_empty() {
        let frameworks = sdk_path.join("System/Library/Frameworks");
        for name in apple_frameworks {
            let framework = frameworks.join(format!("{name}.framework"));
            if !framework.is_dir() {
                warn!(framework = %name, path = %framework.display(), "system includes: Apple framework not found");
            }
        }
        includes.framework_directories.push(frameworks);
    }

    includes
}

fn xcrun_sdk_path(sdk: &str) -> Option<PathBuf> {
    let output = match Command::new("xcrun").args(["--sdk", sdk, "--show-sdk-path"]).output() {
        Ok(output) if output.status.success() => output,
        Ok(output) => {
            warn!(sdk, status = %output.status, "system includes: xcrun failed");
            return None;
        }
        Err(error) => {
            warn!(sdk, %error, "system includes: xcrun could not be started");
            return None;
        }
    };

    let path = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!path.is_empty()).then(|| PathBuf::from(path))
}

// ── Windows ──────────────────────────────────────────────────────────

const WINDOWS_KITS_INCLUDE: &str = r"C:\Program Files (x86)\Windows Kits\10\Include";

/// The `ucrt` directory of the highest installed SDK version under `kits`.
pub(crate) fn windows_directories(kits: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(kits) else {
        warn!(path = %kits.display(), "system includes: Windows Kits not found");
        return Vec::new();
    };

    let latest = entries
        .filter_map(Result::ok)
        .filter_map(|entry| {
            let name = entry.file_name().to_string_lossy().into_owned();
            parse_version(&name).map(|version| (version, entry.path()))
        })
        .max_by(|(left, _), (right, _)| left.cmp(right));

    latest.map(|(_, path)| vec![path.join("ucrt")]).unwrap_or_default()
}

fn parse_version(name: &str) -> Option<Vec<u32>> {
    name.split('.').map(|part| part.parse().ok()).collect()
}
