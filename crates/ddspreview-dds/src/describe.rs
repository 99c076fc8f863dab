//! One-line, human readable texture summaries.

use crate::bitmask::BitmaskLayout;
use crate::format::{CanonicalFormat, FormatDescriptor};
use crate::header::{DdsHeader, DdsHeaderDxt10, DdsPixelFormat};

/// Summarize a resolved texture, e.g. `"DXT5 (equivalent to BC3_UNORM), 512×512 2D, Mipmapped"`.
pub fn describe(
    header: &DdsHeader,
    dx10: Option<&DdsHeaderDxt10>,
    format: &FormatDescriptor,
    is_cubemap: bool,
) -> String {
    let format_name = match (dx10, format.format()) {
        (Some(_), resolved) => resolved.to_string(),
        (None, CanonicalFormat::Dxgi(resolved)) => format!(
            "{} (equivalent to {})",
            header.pixel_format.four_cc,
            resolved.name()
        ),
        (None, CanonicalFormat::Bitmask(layout)) => describe_bitmask(layout),
    };

    let dimensions = if is_cubemap { "Cubemap" } else { "2D" };
    let mipmaps = if header.mip_levels() != 1 {
        "Mipmapped"
    } else {
        "No mipmaps"
    };

    format!(
        "{format_name}, {}×{} {dimensions}, {mipmaps}",
        header.width(),
        header.height()
    )
}

/// List the channel masks a bitmask format declares.
pub fn describe_bitmask(layout: &BitmaskLayout) -> String {
    let mut parts = Vec::new();

    if layout.has_color() {
        parts.push(format!(
            "Red bitmask {:08X}, Green bitmask {:08X}, Blue bitmask {:08X}",
            layout.r_mask, layout.g_mask, layout.b_mask
        ));
    }
    if layout.is_luminance() {
        parts.push(format!("Luminance bitmask {:08X}", layout.r_mask));
    }
    if layout.flags & (DdsPixelFormat::DDPF_ALPHA | DdsPixelFormat::DDPF_ALPHAPIXELS) != 0 {
        parts.push(format!("Alpha bitmask {:08X}", layout.a_mask));
    }

    parts.join(", ")
}
