/// Data layer: recon volume types, dataset location resolution, and loading.
///
/// Architecture:
/// ```text
///  .h5 / .hdf5
///        │
///        ▼
///   ┌──────────┐
///   │ resolver  │  try /data, then /MCT/DATA (metadata only)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  read full array + Spacing attribute
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Channel  │  titled, spaced, published volume
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod resolver;
