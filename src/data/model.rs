use std::fmt;

use ndarray::{ArrayD, Axis};

// ---------------------------------------------------------------------------
// VolumeData – a fully materialized recon volume
// ---------------------------------------------------------------------------

/// An N-dimensional volume read from a recon file, tagged by element type.
///
/// The channel pipeline accepts exactly these seven element types; a dataset
/// stored as anything else (float64, int64, strings, …) is rejected at load
/// time, so a constructed `VolumeData` is always displayable.
#[derive(Debug, Clone)]
pub enum VolumeData {
    I8(ArrayD<i8>),
    U8(ArrayD<u8>),
    I16(ArrayD<i16>),
    U16(ArrayD<u16>),
    I32(ArrayD<i32>),
    U32(ArrayD<u32>),
    F32(ArrayD<f32>),
}

/// Run `$body` with `$arr` bound to the typed array inside the enum.
macro_rules! with_volume {
    ($vol:expr, $arr:ident => $body:expr) => {
        match $vol {
            VolumeData::I8($arr) => $body,
            VolumeData::U8($arr) => $body,
            VolumeData::I16($arr) => $body,
            VolumeData::U16($arr) => $body,
            VolumeData::I32($arr) => $body,
            VolumeData::U32($arr) => $body,
            VolumeData::F32($arr) => $body,
        }
    };
}

impl VolumeData {
    /// Per-axis lengths of the underlying array.
    pub fn shape(&self) -> &[usize] {
        with_volume!(self, a => a.shape())
    }

    /// Number of axes.
    pub fn ndim(&self) -> usize {
        with_volume!(self, a => a.ndim())
    }

    /// Total number of voxels.
    pub fn len(&self) -> usize {
        with_volume!(self, a => a.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element type name as stored in the file.
    pub fn element_type(&self) -> &'static str {
        match self {
            VolumeData::I8(_) => "int8",
            VolumeData::U8(_) => "uint8",
            VolumeData::I16(_) => "int16",
            VolumeData::U16(_) => "uint16",
            VolumeData::I32(_) => "int32",
            VolumeData::U32(_) => "uint32",
            VolumeData::F32(_) => "float32",
        }
    }

    /// Number of display planes: the leading-axis length for 3-D volumes,
    /// 1 for 2-D images, 0 for ranks the viewer cannot slice.
    pub fn depth(&self) -> usize {
        match self.ndim() {
            2 => 1,
            3 => self.shape()[0],
            _ => 0,
        }
    }

    /// Extract one display plane as row-major values plus `[width, height]`.
    ///
    /// 3-D volumes are sliced along the leading axis (recon files are stored
    /// z-major); 2-D volumes have a single plane at index 0. Other ranks
    /// yield `None`.
    pub fn plane(&self, index: usize) -> Option<(Vec<f64>, [usize; 2])> {
        with_volume!(self, a => plane_of(a, index))
    }

    /// Minimum and maximum voxel value, for display normalization.
    /// `None` for an empty volume.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        with_volume!(self, a => range_of(a))
    }
}

fn plane_of<T: Copy + Into<f64>>(arr: &ArrayD<T>, index: usize) -> Option<(Vec<f64>, [usize; 2])> {
    match arr.ndim() {
        2 => {
            if index != 0 {
                return None;
            }
            let (h, w) = (arr.shape()[0], arr.shape()[1]);
            Some((arr.iter().map(|&v| v.into()).collect(), [w, h]))
        }
        3 => {
            if index >= arr.shape()[0] {
                return None;
            }
            let plane = arr.index_axis(Axis(0), index);
            let (h, w) = (plane.shape()[0], plane.shape()[1]);
            Some((plane.iter().map(|&v| v.into()).collect(), [w, h]))
        }
        _ => None,
    }
}

fn range_of<T: Copy + Into<f64>>(arr: &ArrayD<T>) -> Option<(f64, f64)> {
    let mut values = arr.iter();
    let first: f64 = (*values.next()?).into();
    let (mut lo, mut hi) = (first, first);
    for &v in values {
        let v: f64 = v.into();
        if v < lo {
            lo = v;
        }
        if v > hi {
            hi = v;
        }
    }
    Some((lo, hi))
}

// ---------------------------------------------------------------------------
// Spacing – physical voxel side lengths
// ---------------------------------------------------------------------------

/// Distance between adjacent voxel centers along each axis, in metres.
/// Files without a `Spacing` attribute get unit spacing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spacing {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Default for Spacing {
    fn default() -> Self {
        Spacing { x: 1.0, y: 1.0, z: 1.0 }
    }
}

impl fmt::Display for Spacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} × {} × {} m", self.x, self.y, self.z)
    }
}

// ---------------------------------------------------------------------------
// Channel – a displayable volumetric entity
// ---------------------------------------------------------------------------

/// A published volume: the unit the UI lists, selects, and renders.
#[derive(Debug, Clone)]
pub struct Channel {
    pub title: String,
    pub spacing: Spacing,
    pub volume: VolumeData,
}

impl Channel {
    /// Wrap a volume as an untitled channel with unit spacing. Title and
    /// spacing are set afterwards, before the channel is published.
    pub fn from_volume(volume: VolumeData) -> Self {
        Channel {
            title: String::new(),
            spacing: Spacing::default(),
            volume,
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_spacing(&mut self, spacing: Spacing) {
        self.spacing = spacing;
    }
}

// ---------------------------------------------------------------------------
// ChannelList – published channels, in publish order
// ---------------------------------------------------------------------------

/// Every published channel of the session. Publishing never dedups: importing
/// the same file twice yields two independent channels.
#[derive(Debug, Default)]
pub struct ChannelList {
    channels: Vec<Channel>,
}

impl ChannelList {
    /// Make a channel visible and selectable; returns its index.
    pub fn publish(&mut self, channel: Channel) -> usize {
        self.channels.push(channel);
        self.channels.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&Channel> {
        self.channels.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Channel> {
        self.channels.iter()
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}
