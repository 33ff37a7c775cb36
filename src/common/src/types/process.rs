use std::path::MAIN_SEPARATOR;

/// A live process whose executable path matched a developer tool indicator.
///
/// Records only exist for matches: they are built by
/// [`classify`](crate::target_process::classify) and are never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ProcessRecord {
    pid: u32,
    executable_path: String,
    name: String,
    is_development_tool: bool,
}

impl ProcessRecord {
    pub(crate) fn matched(pid: u32, executable_path: &str) -> Self {
        Self {
            pid,
            name: base_name(executable_path).to_string(),
            executable_path: executable_path.to_string(),
            is_development_tool: true,
        }
    }

    pub fn pid(&self) -> u32 {
        self.pid
    }

    pub fn executable_path(&self) -> &str {
        &self.executable_path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_development_tool(&self) -> bool {
        self.is_development_tool
    }
}

/// Everything after the last path separator, or the whole path when there is none.
fn base_name(path: &str) -> &str {
    path.rsplit_once(|c: char| c == '/' || c == MAIN_SEPARATOR)
        .map(|(_, name)| name)
        .unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/usr/bin/gcc-12", "gcc-12")]
    #[case("/usr/local/bin/node", "node")]
    #[case(
        "/Applications/Visual Studio Code.app/Contents/MacOS/Electron",
        "Electron"
    )]
    #[case("cargo", "cargo")]
    #[case("/opt/tools/", "")]
    fn test_base_name(#[case] path: &str, #[case] expected: &str) {
        assert_eq!(base_name(path), expected);
    }

    #[test]
    fn test_matched_record_derives_name_and_flag() {
        let record = ProcessRecord::matched(42, "/usr/bin/gcc-12");

        assert_eq!(record.pid(), 42);
        assert_eq!(record.executable_path(), "/usr/bin/gcc-12");
        assert_eq!(record.name(), "gcc-12");
        assert!(record.is_development_tool());
    }
}
