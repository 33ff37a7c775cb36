/// Substrings that mark an executable path as developer tooling:
/// editors and terminals, compilers and build tools, language runtimes, VCS binaries.
pub const DEV_TOOL_INDICATORS: &[&str] = &[
    "vscode",
    "Code.app",
    "cpptools",
    "Terminal.app",
    "iterm",
    "clang",
    "gcc",
    "cmake",
    "ninja",
    "python",
    "node",
    "cargo",
    "anaconda",
    "miniconda",
    "bin/git",
    "bin/make",
];
