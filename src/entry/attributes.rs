//! Platform attribute bits (archive/hidden/readonly/system).
//!
//! Only Windows has a native attribute word. Unix derives the two bits it can
//! express; other platforms report nothing, which callers treat as "fall back
//! to the dot-prefix convention".

use std::fs::Metadata;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttributeBits {
    pub archive: bool,
    pub hidden: bool,
    pub readonly: bool,
    pub system: bool,
}

impl AttributeBits {
    /// Four-character flag string in `ahrs` order, `-` for unset bits.
    pub fn flags(&self) -> String {
        [
            (self.archive, 'a'),
            (self.hidden, 'h'),
            (self.readonly, 'r'),
            (self.system, 's'),
        ]
        .iter()
        .map(|&(set, c)| if set { c } else { '-' })
        .collect()
    }
}

#[cfg(windows)]
pub fn lookup(_name: &str, metadata: &Metadata) -> Option<AttributeBits> {
    use std::os::windows::fs::MetadataExt;

    const READONLY: u32 = 0x1;
    const HIDDEN: u32 = 0x2;
    const SYSTEM: u32 = 0x4;
    const ARCHIVE: u32 = 0x20;

    let word = metadata.file_attributes();
    Some(AttributeBits {
        archive: word & ARCHIVE != 0,
        hidden: word & HIDDEN != 0,
        readonly: word & READONLY != 0,
        system: word & SYSTEM != 0,
    })
}

#[cfg(unix)]
pub fn lookup(name: &str, metadata: &Metadata) -> Option<AttributeBits> {
    use std::os::unix::fs::PermissionsExt;

    Some(AttributeBits {
        archive: false,
        hidden: name.starts_with('.') && name != "." && name != "..",
        readonly: metadata.permissions().mode() & 0o222 == 0,
        system: false,
    })
}

#[cfg(not(any(unix, windows)))]
pub fn lookup(_name: &str, _metadata: &Metadata) -> Option<AttributeBits> {
    None
}
