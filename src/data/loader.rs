use std::path::Path;

use hdf5::types::{FloatSize, IntSize, TypeDescriptor};
use hdf5::Dataset;
use thiserror::Error;

use super::model::{Spacing, VolumeData};

// ---------------------------------------------------------------------------
// Volume loading
// ---------------------------------------------------------------------------

/// Name of the per-dataset attribute carrying voxel side lengths (metres).
pub const SPACING_ATTR: &str = "Spacing";

/// Everything the importer needs from one recon file.
#[derive(Debug, Clone)]
pub struct LoadedVolume {
    pub data: VolumeData,
    pub spacing: Spacing,
}

/// A failed read. An absent `Spacing` attribute is NOT a failure; everything
/// else (unopenable container, missing dataset, rejected element type,
/// garbled attribute) is, and propagates to the caller without retry.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Hdf5(#[from] hdf5::Error),

    #[error("unsupported element type {found}; accepted types are 8/16/32-bit integers and float32")]
    UnsupportedElementType { found: String },

    #[error("Spacing attribute holds {found} values, expected 3")]
    MalformedSpacing { found: usize },
}

/// Load a data volume from an HDF5 file.
///
/// Opens the container read-only, reads the dataset at `h5_path` (case
/// sensitive, e.g. `/data`) fully into memory, and reads its voxel spacing.
/// The file handle is closed on all paths when this returns.
pub fn load_volume(filepath: &Path, h5_path: &str) -> Result<LoadedVolume, LoadError> {
    let file = hdf5::File::open(filepath)?;
    let dataset = file.dataset(h5_path)?;
    let data = read_volume(&dataset)?;
    let spacing = read_spacing(&dataset)?;
    Ok(LoadedVolume { data, spacing })
}

/// Materialize the whole dataset, dispatching on its stored element type.
fn read_volume(dataset: &Dataset) -> Result<VolumeData, LoadError> {
    let descriptor = dataset.dtype()?.to_descriptor()?;
    let data = match descriptor {
        TypeDescriptor::Integer(IntSize::U1) => VolumeData::I8(dataset.read_dyn()?),
        TypeDescriptor::Integer(IntSize::U2) => VolumeData::I16(dataset.read_dyn()?),
        TypeDescriptor::Integer(IntSize::U4) => VolumeData::I32(dataset.read_dyn()?),
        TypeDescriptor::Unsigned(IntSize::U1) => VolumeData::U8(dataset.read_dyn()?),
        TypeDescriptor::Unsigned(IntSize::U2) => VolumeData::U16(dataset.read_dyn()?),
        TypeDescriptor::Unsigned(IntSize::U4) => VolumeData::U32(dataset.read_dyn()?),
        TypeDescriptor::Float(FloatSize::U4) => VolumeData::F32(dataset.read_dyn()?),
        other => {
            return Err(LoadError::UnsupportedElementType {
                found: format!("{other:?}"),
            })
        }
    };
    Ok(data)
}

/// Voxel side lengths from the dataset's `Spacing` attribute.
fn read_spacing(dataset: &Dataset) -> Result<Spacing, LoadError> {
    let attr = match dataset.attr(SPACING_ATTR) {
        Ok(attr) => attr,
        // No attribute: older recon files carry none, default to unit spacing.
        Err(_) => return Ok(Spacing::default()),
    };
    let values = attr.read_raw::<f64>()?;
    match values[..] {
        [x, y, z] => Ok(Spacing { x, y, z }),
        _ => Err(LoadError::MalformedSpacing { found: values.len() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr1, Array3};
    use tempfile::NamedTempFile;

    fn volume() -> Array3<u16> {
        Array3::from_shape_fn((10, 10, 10), |(z, y, x)| (z * 100 + y * 10 + x) as u16)
    }

    fn write_recon(h5_path: &str, spacing: Option<[f64; 3]>) -> NamedTempFile {
        let tmp = NamedTempFile::new().unwrap();
        let file = hdf5::File::create(tmp.path()).unwrap();
        let dataset = match h5_path {
            "/data" => file.new_dataset::<u16>().shape((10, 10, 10)).create("data"),
            "/MCT/DATA" => file
                .create_group("MCT")
                .unwrap()
                .new_dataset::<u16>()
                .shape((10, 10, 10))
                .create("DATA"),
            other => panic!("unexpected test path {other}"),
        }
        .unwrap();
        dataset.write(&volume()).unwrap();
        if let Some([x, y, z]) = spacing {
            dataset
                .new_attr::<f64>()
                .shape(3)
                .create(SPACING_ATTR)
                .unwrap()
                .write(&arr1(&[x, y, z]))
                .unwrap();
        }
        tmp
    }

    #[test]
    fn reads_full_array_and_defaults_spacing() {
        let tmp = write_recon("/data", None);
        let loaded = load_volume(tmp.path(), "/data").unwrap();

        assert_eq!(loaded.spacing, Spacing::default());
        match loaded.data {
            VolumeData::U16(arr) => assert_eq!(arr, volume().into_dyn()),
            other => panic!("expected uint16 volume, got {}", other.element_type()),
        }
    }

    #[test]
    fn spacing_attribute_is_returned_verbatim() {
        let tmp = write_recon("/data", Some([2.0e-6, 2.5e-6, 3.0e-6]));
        let loaded = load_volume(tmp.path(), "/data").unwrap();
        assert_eq!(
            loaded.spacing,
            Spacing { x: 2.0e-6, y: 2.5e-6, z: 3.0e-6 }
        );
    }

    #[test]
    fn loads_from_nested_location() {
        let tmp = write_recon("/MCT/DATA", None);
        let loaded = load_volume(tmp.path(), "/MCT/DATA").unwrap();
        assert_eq!(loaded.data.shape(), &[10, 10, 10]);
        assert_eq!(loaded.spacing, Spacing::default());
    }

    #[test]
    fn float32_volume_is_accepted() {
        let tmp = NamedTempFile::new().unwrap();
        let file = hdf5::File::create(tmp.path()).unwrap();
        let arr = Array3::from_shape_fn((3, 3, 3), |(z, y, x)| (z + y + x) as f32);
        file.new_dataset::<f32>()
            .shape((3, 3, 3))
            .create("data")
            .unwrap()
            .write(&arr)
            .unwrap();
        drop(file);

        let loaded = load_volume(tmp.path(), "/data").unwrap();
        assert_eq!(loaded.data.element_type(), "float32");
    }

    #[test]
    fn float64_volume_is_rejected() {
        let tmp = NamedTempFile::new().unwrap();
        let file = hdf5::File::create(tmp.path()).unwrap();
        let arr = Array3::from_shape_fn((3, 3, 3), |(z, y, x)| (z + y + x) as f64);
        file.new_dataset::<f64>()
            .shape((3, 3, 3))
            .create("data")
            .unwrap()
            .write(&arr)
            .unwrap();
        drop(file);

        let err = load_volume(tmp.path(), "/data").unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedElementType { .. }));
    }

    #[test]
    fn missing_dataset_is_fatal() {
        let tmp = write_recon("/data", None);
        let err = load_volume(tmp.path(), "/MCT/DATA").unwrap_err();
        assert!(matches!(err, LoadError::Hdf5(_)));
    }

    #[test]
    fn malformed_spacing_is_fatal() {
        let tmp = NamedTempFile::new().unwrap();
        let file = hdf5::File::create(tmp.path()).unwrap();
        let dataset = file
            .new_dataset::<u16>()
            .shape((2, 2, 2))
            .create("data")
            .unwrap();
        dataset.write(&Array3::<u16>::zeros((2, 2, 2))).unwrap();
        dataset
            .new_attr::<f64>()
            .shape(2)
            .create(SPACING_ATTR)
            .unwrap()
            .write(&arr1(&[1.0, 2.0]))
            .unwrap();
        drop(file);

        let err = load_volume(tmp.path(), "/data").unwrap_err();
        assert!(matches!(err, LoadError::MalformedSpacing { found: 2 }));
    }
}
