use eframe::egui::{self, ColorImage, TextureOptions, Ui};

use crate::data::model::VolumeData;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Slice view (central panel)
// ---------------------------------------------------------------------------

/// Render a grayscale plane of the selected channel, with a slice slider for
/// 3-D volumes.
pub fn slice_view(ui: &mut Ui, state: &mut AppState) {
    let Some(index) = state.selected else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Import a recon to view it  (MCT → Import MCT Recon…)");
        });
        return;
    };

    let Some(depth) = state.channels.get(index).map(|c| c.volume.depth()) else {
        return;
    };

    if depth == 0 {
        if let Some(channel) = state.channels.get(index) {
            ui.label(format!(
                "'{}' is a {}-D array of shape {:?}; the slice view renders 2-D and 3-D volumes only.",
                channel.title,
                channel.volume.ndim(),
                channel.volume.shape(),
            ));
        }
        return;
    }

    state.slice_index = state.slice_index.min(depth - 1);
    if depth > 1 {
        ui.horizontal(|ui: &mut Ui| {
            ui.label("Slice");
            ui.add(egui::Slider::new(&mut state.slice_index, 0..=depth - 1));
        });
        ui.separator();
    }

    // (Re)upload the texture only when the viewed plane changes.
    let key = (index, state.slice_index);
    if state.slice_texture_key != Some(key) {
        let image = state
            .channels
            .get(index)
            .and_then(|c| plane_image(&c.volume, key.1));
        state.slice_texture =
            image.map(|img| ui.ctx().load_texture("slice_view", img, TextureOptions::NEAREST));
        state.slice_texture_key = Some(key);
    }

    if let Some(texture) = &state.slice_texture {
        let size = texture.size_vec2();
        let scale = (ui.available_width() / size.x)
            .min(ui.available_height() / size.y)
            .clamp(0.05, 8.0);
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.image((texture.id(), size * scale));
        });
    }
}

/// Map one plane to 8-bit grayscale, normalized to the plane's value range.
fn plane_image(volume: &VolumeData, index: usize) -> Option<ColorImage> {
    let (values, [w, h]) = volume.plane(index)?;

    let lo = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let hi = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let range = hi - lo;

    let pixels: Vec<u8> = if range.abs() < f64::EPSILON {
        vec![0; values.len()]
    } else {
        values
            .iter()
            .map(|&v| (((v - lo) / range) * 255.0) as u8)
            .collect()
    };

    Some(ColorImage::from_gray([w, h], &pixels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    #[test]
    fn plane_normalizes_to_full_gray_range() {
        let arr = Array2::from_shape_vec((1, 3), vec![10u16, 20, 30]).unwrap();
        let volume = VolumeData::U16(arr.into_dyn());

        let image = plane_image(&volume, 0).unwrap();
        assert_eq!(image.size, [3, 1]);
        let gray: Vec<u8> = image.pixels.iter().map(|p| p.r()).collect();
        assert_eq!(gray, vec![0, 127, 255]);
    }

    #[test]
    fn constant_plane_renders_black() {
        let arr = Array2::from_elem((2, 2), 7u8);
        let volume = VolumeData::U8(arr.into_dyn());

        let image = plane_image(&volume, 0).unwrap();
        assert!(image.pixels.iter().all(|p| p.r() == 0));
    }
}
