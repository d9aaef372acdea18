//! Metadata snapshot for a single filesystem object.

use std::fs::Metadata;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Local, Utc};
use serde::{Serialize, Serializer};

/// One file or directory captured during a scan.
///
/// Entries are immutable and carry no link to their parent: a recursive scan
/// yields a flat list in which nested entries look exactly like direct
/// children. Directory sizes are always `0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    name: String,
    size: u64,
    is_dir: bool,
    permissions: u32,
    #[serde(serialize_with = "serialize_modified")]
    modified: SystemTime,
}

impl Entry {
    pub fn new(
        name: impl Into<String>,
        size: u64,
        is_dir: bool,
        permissions: u32,
        modified: SystemTime,
    ) -> Self {
        let name = name.into();
        debug_assert!(!name.is_empty(), "entry names are never empty");
        Self {
            name,
            size: if is_dir { 0 } else { size },
            is_dir,
            permissions: permissions & 0o777,
            modified,
        }
    }

    /// Build an entry from the metadata of `name`.
    ///
    /// `metadata` decides whether the entry is a directory, so pass
    /// `symlink_metadata` to report links as links and `metadata` to report
    /// what they point at.
    pub fn from_metadata(name: impl Into<String>, metadata: &Metadata) -> Self {
        Self::new(
            name,
            metadata.len(),
            metadata.is_dir(),
            permission_bits(metadata),
            metadata.modified().unwrap_or(UNIX_EPOCH),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Size in bytes. Always `0` for directories.
    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// Permission bits (`0o777` mask).
    pub fn permissions(&self) -> u32 {
        self.permissions
    }

    pub fn modified(&self) -> SystemTime {
        self.modified
    }

    pub fn modified_local(&self) -> DateTime<Local> {
        DateTime::<Local>::from(self.modified)
    }

    /// `ls`-style permission string, e.g. `-rwxr-xr-x`.
    ///
    /// The leading character is always `-`: only the permission mask is
    /// captured, not the file type.
    pub fn permissions_string(&self) -> String {
        const FLAGS: [(u32, char); 9] = [
            (0o400, 'r'),
            (0o200, 'w'),
            (0o100, 'x'),
            (0o040, 'r'),
            (0o020, 'w'),
            (0o010, 'x'),
            (0o004, 'r'),
            (0o002, 'w'),
            (0o001, 'x'),
        ];

        let mut out = String::with_capacity(10);
        out.push('-');
        for (bit, flag) in FLAGS {
            out.push(if self.permissions & bit != 0 { flag } else { '-' });
        }
        out
    }
}

#[cfg(unix)]
fn permission_bits(metadata: &Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o777
}

#[cfg(not(unix))]
fn permission_bits(metadata: &Metadata) -> u32 {
    if metadata.permissions().readonly() {
        0o444
    } else {
        0o666
    }
}

fn serialize_modified<S: Serializer>(time: &SystemTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&DateTime::<Utc>::from(*time).to_rfc3339())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::Duration;
    use tempfile::TempDir;

    #[test]
    fn test_entry_from_regular_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("notes.txt");
        fs::write(&path, "hello").unwrap();

        let entry = Entry::from_metadata("notes.txt", &fs::metadata(&path).unwrap());
        assert_eq!(entry.name(), "notes.txt");
        assert_eq!(entry.size(), 5);
        assert!(!entry.is_dir());
        assert!(entry.modified() > UNIX_EPOCH);
    }

    #[test]
    fn test_entry_from_directory_has_zero_size() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("sub");
        fs::create_dir(&path).unwrap();

        let entry = Entry::from_metadata("sub", &fs::metadata(&path).unwrap());
        assert!(entry.is_dir());
        assert_eq!(entry.size(), 0);
    }

    #[test]
    fn test_new_masks_type_bits() {
        let entry = Entry::new("a", 1, false, 0o100644, UNIX_EPOCH);
        assert_eq!(entry.permissions(), 0o644);
    }

    #[test]
    fn test_permissions_string() {
        let entry = Entry::new("a", 0, false, 0o755, UNIX_EPOCH);
        assert_eq!(entry.permissions_string(), "-rwxr-xr-x");

        let entry = Entry::new("b", 0, false, 0o640, UNIX_EPOCH);
        assert_eq!(entry.permissions_string(), "-rw-r-----");

        let entry = Entry::new("c", 0, false, 0, UNIX_EPOCH);
        assert_eq!(entry.permissions_string(), "----------");
    }

    #[cfg(unix)]
    #[test]
    fn test_permission_bits_from_disk() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("script.sh");
        fs::write(&path, "#!/bin/sh\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o750)).unwrap();

        let entry = Entry::from_metadata("script.sh", &fs::metadata(&path).unwrap());
        assert_eq!(entry.permissions(), 0o750);
    }

    #[test]
    fn test_json_shape() {
        let entry = Entry::new(
            "data.bin",
            42,
            false,
            0o600,
            UNIX_EPOCH + Duration::from_secs(86_400),
        );
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["name"], "data.bin");
        assert_eq!(json["size"], 42);
        assert_eq!(json["is_dir"], false);
        assert_eq!(json["permissions"], 0o600);
        assert_eq!(json["modified"], "1970-01-02T00:00:00+00:00");
    }
}
