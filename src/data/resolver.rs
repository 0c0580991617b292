use std::path::Path;

use super::loader::LoadError;

// ---------------------------------------------------------------------------
// Dataset location resolution
// ---------------------------------------------------------------------------

/// Internal locations where MCT recon files store the volume, in priority
/// order. Paths are case sensitive; the first existing one wins.
pub const VOLUME_PATHS: [&str; 2] = ["/data", "/MCT/DATA"];

/// Check whether `h5_path` exists in an HDF5 file without reading any
/// contents. The container is opened read-only and closed again; the check
/// walks file metadata only, never dataset values.
pub fn h5_path_exists(filepath: &Path, h5_path: &str) -> Result<bool, LoadError> {
    let file = hdf5::File::open(filepath)?;
    Ok(file.link_exists(h5_path))
}

/// Resolve which of the known volume locations the file uses.
///
/// `Ok(None)` means the file is a valid HDF5 container holding neither
/// candidate; an unreadable container is an error.
pub fn resolve_volume_path(filepath: &Path) -> Result<Option<&'static str>, LoadError> {
    for candidate in VOLUME_PATHS {
        if h5_path_exists(filepath, candidate)? {
            return Ok(Some(candidate));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;
    use tempfile::NamedTempFile;

    fn volume() -> Array3<u16> {
        Array3::from_shape_fn((4, 4, 4), |(z, y, x)| (z * 16 + y * 4 + x) as u16)
    }

    fn file_with_root_data() -> NamedTempFile {
        let tmp = NamedTempFile::new().unwrap();
        let file = hdf5::File::create(tmp.path()).unwrap();
        file.new_dataset::<u16>()
            .shape((4, 4, 4))
            .create("data")
            .unwrap()
            .write(&volume())
            .unwrap();
        tmp
    }

    fn file_with_mct_data() -> NamedTempFile {
        let tmp = NamedTempFile::new().unwrap();
        let file = hdf5::File::create(tmp.path()).unwrap();
        let group = file.create_group("MCT").unwrap();
        group
            .new_dataset::<u16>()
            .shape((4, 4, 4))
            .create("DATA")
            .unwrap()
            .write(&volume())
            .unwrap();
        tmp
    }

    #[test]
    fn finds_root_data() {
        let tmp = file_with_root_data();
        assert!(h5_path_exists(tmp.path(), "/data").unwrap());
        assert!(!h5_path_exists(tmp.path(), "/MCT/DATA").unwrap());
        assert_eq!(resolve_volume_path(tmp.path()).unwrap(), Some("/data"));
    }

    #[test]
    fn falls_back_to_mct_data() {
        let tmp = file_with_mct_data();
        assert!(!h5_path_exists(tmp.path(), "/data").unwrap());
        assert_eq!(resolve_volume_path(tmp.path()).unwrap(), Some("/MCT/DATA"));
    }

    #[test]
    fn root_data_wins_when_both_exist() {
        let tmp = file_with_root_data();
        let file = hdf5::File::open_rw(tmp.path()).unwrap();
        let group = file.create_group("MCT").unwrap();
        group
            .new_dataset::<u16>()
            .shape((4, 4, 4))
            .create("DATA")
            .unwrap()
            .write(&volume())
            .unwrap();
        drop(file);

        assert_eq!(resolve_volume_path(tmp.path()).unwrap(), Some("/data"));
    }

    #[test]
    fn neither_candidate_resolves_to_none() {
        let tmp = NamedTempFile::new().unwrap();
        let file = hdf5::File::create(tmp.path()).unwrap();
        file.new_dataset::<u16>()
            .shape((2, 2))
            .create("unrelated")
            .unwrap();
        drop(file);

        assert_eq!(resolve_volume_path(tmp.path()).unwrap(), None);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let tmp = file_with_root_data();
        assert!(!h5_path_exists(tmp.path(), "/DATA").unwrap());
    }

    #[test]
    fn unreadable_container_is_an_error() {
        let tmp = NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), b"not an hdf5 file").unwrap();
        assert!(h5_path_exists(tmp.path(), "/data").is_err());
        assert!(resolve_volume_path(tmp.path()).is_err());
    }
}
