// SPDX-License-Identifier: MPL-2.0
//! Build script for platform-specific resources.
//!
//! On Windows, this embeds version metadata into the executable so it
//! appears correctly in the taskbar and file explorer.

fn main() {
    // Only run on Windows
    #[cfg(target_os = "windows")]
    {
        let res = winresource::WindowsResource::new();
        res.compile().expect("Failed to compile Windows resources");
    }
}
