//! Writes demonstration recon files so the viewer can be exercised without
//! beamline data: one file per known volume layout.

use anyhow::{Context, Result};
use ndarray::{arr1, Array3};

const SIZE: usize = 64;
const VOXEL_SIZE_M: f64 = 2.3e-6;

/// Deterministic phantom: a solid sphere with a radial gradient, values in
/// `[0, 1]`.
fn phantom() -> Array3<f32> {
    let center = (SIZE as f32 - 1.0) / 2.0;
    Array3::from_shape_fn((SIZE, SIZE, SIZE), |(z, y, x)| {
        let dz = z as f32 - center;
        let dy = y as f32 - center;
        let dx = x as f32 - center;
        let r = (dx * dx + dy * dy + dz * dz).sqrt() / center;
        if r > 1.0 {
            0.0
        } else {
            1.0 - r
        }
    })
}

/// Current pipeline layout: uint16 volume at `/data` with a `Spacing`
/// attribute in metres.
fn write_modern(path: &str) -> Result<()> {
    let file = hdf5::File::create(path).with_context(|| format!("creating {path}"))?;
    let volume = phantom().mapv(|v| (v * f32::from(u16::MAX)) as u16);

    let dataset = file
        .new_dataset::<u16>()
        .shape((SIZE, SIZE, SIZE))
        .create("data")
        .context("creating /data")?;
    dataset.write(&volume).context("writing /data")?;
    dataset
        .new_attr::<f64>()
        .shape(3)
        .create("Spacing")?
        .write(&arr1(&[VOXEL_SIZE_M; 3]))
        .context("writing Spacing attribute")?;
    Ok(())
}

/// Older pipeline layout: float32 volume at `/MCT/DATA`, no spacing recorded.
fn write_legacy(path: &str) -> Result<()> {
    let file = hdf5::File::create(path).with_context(|| format!("creating {path}"))?;
    let group = file.create_group("MCT").context("creating /MCT")?;
    group
        .new_dataset::<f32>()
        .shape((SIZE, SIZE, SIZE))
        .create("DATA")
        .context("creating /MCT/DATA")?
        .write(&phantom())
        .context("writing /MCT/DATA")?;
    Ok(())
}

fn main() -> Result<()> {
    write_modern("demo_recon.h5")?;
    write_legacy("demo_recon_legacy.h5")?;

    println!(
        "Wrote demo_recon.h5 (/data, uint16, {SIZE}³, Spacing {VOXEL_SIZE_M} m) \
         and demo_recon_legacy.h5 (/MCT/DATA, float32, no Spacing)"
    );
    Ok(())
}
