//! Saved-state envelope for the progress widgets
//!
//! A widget's persisted fields are appended after the opaque payload of
//! whatever owns it ("parent"), inside a small tagged header so that a blob
//! written by someone else is recognised and handed back untouched.
//!
//! Layout, little-endian:
//!
//! ```text
//! magic       4  b"PNPG"
//! version     1  1
//! kind        1  1 = progress, 2 = checkable progress
//! parent_len  4  u32
//! parent      parent_len bytes
//! progress    4  i32
//! max         4  i32
//! checked     1  kind 2 only, 0 or 1
//! ```

const MAGIC: &[u8; 4] = b"PNPG";
const VERSION: u8 = 1;
const HEADER_LEN: usize = MAGIC.len() + 1 + 1 + 4;

/// Which widget wrote a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SnapshotKind {
    Progress = 1,
    Checkable = 2,
}

impl SnapshotKind {
    fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            1 => Some(Self::Progress),
            2 => Some(Self::Checkable),
            _ => None,
        }
    }
}

/// Fields persisted by a widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavedFields {
    pub progress: i32,
    pub max: i32,
    /// Present only for checkable widgets
    pub checked: Option<bool>,
}

impl SavedFields {
    pub fn kind(&self) -> SnapshotKind {
        if self.checked.is_some() {
            SnapshotKind::Checkable
        } else {
            SnapshotKind::Progress
        }
    }
}

/// Outcome of offering a blob to a widget's restore path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Restore {
    /// One of ours: apply `fields`, then hand `parent` to the parent restore path
    Ours { parent: Vec<u8>, fields: SavedFields },
    /// Not one of ours: hand the whole blob to the parent restore path
    Delegate(Vec<u8>),
}

/// Why a blob was not recognised
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    BadMagic,
    UnsupportedVersion(u8),
    UnknownKind(u8),
    Truncated { needed: usize, available: usize },
    TrailingBytes(usize),
    InvalidChecked(u8),
}

impl std::fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnapshotError::BadMagic => write!(f, "not a progress snapshot"),
            SnapshotError::UnsupportedVersion(v) => write!(f, "unsupported snapshot version {}", v),
            SnapshotError::UnknownKind(k) => write!(f, "unknown snapshot kind {}", k),
            SnapshotError::Truncated { needed, available } => {
                write!(f, "snapshot truncated: need {} bytes, have {}", needed, available)
            }
            SnapshotError::TrailingBytes(n) => write!(f, "{} trailing bytes after snapshot", n),
            SnapshotError::InvalidChecked(b) => write!(f, "invalid checked flag {}", b),
        }
    }
}

impl std::error::Error for SnapshotError {}

/// Build the persisted blob for a widget.
///
/// With saving disabled the parent payload is returned unchanged.
pub fn save(parent: Vec<u8>, fields: SavedFields, save_enabled: bool) -> Vec<u8> {
    if !save_enabled {
        return parent;
    }
    let Some(parent_len) = encode_len(parent.len()) else {
        tracing::warn!(
            "Parent state of {} bytes is too large to wrap, saving it alone",
            parent.len()
        );
        return parent;
    };

    let mut out = Vec::with_capacity(HEADER_LEN + parent.len() + 9);
    out.extend_from_slice(MAGIC);
    out.push(VERSION);
    out.push(fields.kind() as u8);
    out.extend_from_slice(&parent_len);
    out.extend_from_slice(&parent);
    out.extend_from_slice(&fields.progress.to_le_bytes());
    out.extend_from_slice(&fields.max.to_le_bytes());
    if let Some(checked) = fields.checked {
        out.push(u8::from(checked));
    }
    out
}

/// Little-endian length prefix, or `None` past `u32::MAX`
fn encode_len(len: usize) -> Option<[u8; 4]> {
    u32::try_from(len).ok().map(u32::to_le_bytes)
}

/// Offer a blob to the restore path of a widget of kind `expected`.
///
/// Never fails: anything that is not a well-formed snapshot of that kind is
/// delegated as-is.
pub fn restore(blob: Vec<u8>, expected: SnapshotKind) -> Restore {
    match decode(&blob) {
        Ok((parent, fields)) if fields.kind() == expected => Restore::Ours { parent, fields },
        Ok((_, fields)) => {
            tracing::debug!(
                "Delegating {:?} snapshot offered to a {:?} widget",
                fields.kind(),
                expected
            );
            Restore::Delegate(blob)
        }
        Err(e) => {
            tracing::debug!("Delegating foreign snapshot ({} bytes): {}", blob.len(), e);
            Restore::Delegate(blob)
        }
    }
}

/// Strict decoder behind [`restore`]
pub fn decode(blob: &[u8]) -> Result<(Vec<u8>, SavedFields), SnapshotError> {
    let mut reader = Reader::new(blob);

    if reader.take(MAGIC.len())? != MAGIC {
        return Err(SnapshotError::BadMagic);
    }
    let version = reader.u8()?;
    if version != VERSION {
        return Err(SnapshotError::UnsupportedVersion(version));
    }
    let kind_byte = reader.u8()?;
    let kind = SnapshotKind::from_byte(kind_byte).ok_or(SnapshotError::UnknownKind(kind_byte))?;

    let parent_len = reader.u32()? as usize;
    let parent = reader.take(parent_len)?.to_vec();
    let progress = reader.i32()?;
    let max = reader.i32()?;
    let checked = match kind {
        SnapshotKind::Progress => None,
        SnapshotKind::Checkable => match reader.u8()? {
            0 => Some(false),
            1 => Some(true),
            other => return Err(SnapshotError::InvalidChecked(other)),
        },
    };

    if reader.remaining() > 0 {
        return Err(SnapshotError::TrailingBytes(reader.remaining()));
    }

    Ok((
        parent,
        SavedFields {
            progress,
            max,
            checked,
        },
    ))
}

struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], SnapshotError> {
        if self.remaining() < len {
            return Err(SnapshotError::Truncated {
                needed: self.pos.saturating_add(len),
                available: self.bytes.len(),
            });
        }
        let slice = &self.bytes[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    fn array<const N: usize>(&mut self) -> Result<[u8; N], SnapshotError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    fn u8(&mut self) -> Result<u8, SnapshotError> {
        Ok(self.array::<1>()?[0])
    }

    fn u32(&mut self) -> Result<u32, SnapshotError> {
        Ok(u32::from_le_bytes(self.array()?))
    }

    fn i32(&mut self) -> Result<i32, SnapshotError> {
        Ok(i32::from_le_bytes(self.array()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn progress_fields(progress: i32, max: i32) -> SavedFields {
        SavedFields {
            progress,
            max,
            checked: None,
        }
    }

    #[test]
    fn restores_saved_pairs() {
        for (progress, max) in [(0, 100), (100, 100), (42, 250)] {
            let blob = save(Vec::new(), progress_fields(progress, max), true);
            match restore(blob, SnapshotKind::Progress) {
                Restore::Ours { parent, fields } => {
                    assert!(parent.is_empty());
                    assert_eq!(fields, progress_fields(progress, max));
                }
                other => panic!("expected our snapshot, got {:?}", other),
            }
        }
    }

    #[test]
    fn parent_payload_is_preserved() {
        let parent = b"scroll=12".to_vec();
        let fields = SavedFields {
            progress: -5,
            max: 0,
            checked: Some(true),
        };
        let blob = save(parent.clone(), fields, true);

        assert_eq!(decode(&blob), Ok((parent, fields)));
    }

    #[test]
    fn fields_follow_parent_little_endian() {
        let blob = save(vec![0xaa], progress_fields(1, 2), true);
        assert_eq!(&blob[..4], MAGIC);
        assert_eq!(blob[4], VERSION);
        assert_eq!(blob[5], SnapshotKind::Progress as u8);
        assert_eq!(&blob[6..10], &[1, 0, 0, 0]);
        assert_eq!(blob[10], 0xaa);
        assert_eq!(&blob[11..], &[1, 0, 0, 0, 2, 0, 0, 0]);
    }

    #[test]
    fn other_kind_is_delegated() {
        let fields = SavedFields {
            progress: 3,
            max: 4,
            checked: Some(true),
        };
        let blob = save(Vec::new(), fields, true);
        assert_eq!(
            restore(blob.clone(), SnapshotKind::Progress),
            Restore::Delegate(blob.clone())
        );
        assert!(matches!(
            restore(blob, SnapshotKind::Checkable),
            Restore::Ours { .. }
        ));
    }

    #[test]
    fn disabled_save_returns_parent() {
        let parent = vec![1, 2, 3];
        assert_eq!(save(parent.clone(), progress_fields(9, 10), false), parent);
    }

    #[test]
    fn foreign_blobs_are_delegated_unchanged() {
        let foreign = b"something else entirely".to_vec();
        assert_eq!(
            restore(foreign.clone(), SnapshotKind::Progress),
            Restore::Delegate(foreign)
        );
        assert_eq!(
            restore(Vec::new(), SnapshotKind::Checkable),
            Restore::Delegate(Vec::new())
        );
    }

    #[test]
    fn malformed_snapshots_are_rejected() {
        let good = save(Vec::new(), progress_fields(1, 2), true);

        let truncated = good[..good.len() - 1].to_vec();
        assert!(matches!(
            decode(&truncated),
            Err(SnapshotError::Truncated { .. })
        ));
        assert_eq!(
            restore(truncated.clone(), SnapshotKind::Progress),
            Restore::Delegate(truncated)
        );

        let mut trailing = good.clone();
        trailing.push(0);
        assert_eq!(decode(&trailing), Err(SnapshotError::TrailingBytes(1)));

        let mut future = good.clone();
        future[4] = 2;
        assert_eq!(decode(&future), Err(SnapshotError::UnsupportedVersion(2)));

        let mut unknown = good;
        unknown[5] = 9;
        assert_eq!(decode(&unknown), Err(SnapshotError::UnknownKind(9)));
    }

    #[test]
    fn oversized_parent_length_is_truncation() {
        let mut blob = save(Vec::new(), progress_fields(1, 2), true);
        blob[6..10].copy_from_slice(&u32::MAX.to_le_bytes());
        assert!(matches!(decode(&blob), Err(SnapshotError::Truncated { .. })));
    }

    #[test]
    fn length_prefix_stops_at_u32() {
        assert_eq!(encode_len(3), Some([3, 0, 0, 0]));
        assert_eq!(encode_len(u32::MAX as usize), Some([0xff; 4]));
        #[cfg(target_pointer_width = "64")]
        assert_eq!(encode_len(u32::MAX as usize + 1), None);
    }

    #[test]
    fn huge_reads_report_saturated_need() {
        let mut reader = Reader::new(&[1, 2, 3]);
        reader.take(1).unwrap();
        assert_eq!(
            reader.take(usize::MAX),
            Err(SnapshotError::Truncated {
                needed: usize::MAX,
                available: 3,
            })
        );
    }

    #[test]
    fn invalid_checked_flag_is_rejected() {
        let fields = SavedFields {
            progress: 1,
            max: 2,
            checked: Some(false),
        };
        let mut blob = save(Vec::new(), fields, true);
        let last = blob.len() - 1;
        blob[last] = 7;
        assert_eq!(decode(&blob), Err(SnapshotError::InvalidChecked(7)));
    }
}
