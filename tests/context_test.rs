use shape_ngin::context::{pick_alpha_mode, pick_surface_format};
use wgpu::{CompositeAlphaMode, TextureFormat};

#[test]
fn opaque_alpha_is_preferred() {
    let modes = [
        CompositeAlphaMode::PreMultiplied,
        CompositeAlphaMode::Inherit,
        CompositeAlphaMode::Opaque,
    ];
    assert_eq!(pick_alpha_mode(&modes), CompositeAlphaMode::Opaque);
}

#[test]
fn alpha_falls_back_to_the_first_reported_mode() {
    let modes = [CompositeAlphaMode::PostMultiplied, CompositeAlphaMode::Inherit];
    assert_eq!(pick_alpha_mode(&modes), CompositeAlphaMode::PostMultiplied);
    assert_eq!(pick_alpha_mode(&[]), CompositeAlphaMode::Auto);
}

#[test]
fn linear_surface_format_is_preferred() {
    let formats = [TextureFormat::Bgra8UnormSrgb, TextureFormat::Bgra8Unorm];
    assert_eq!(pick_surface_format(&formats), Some(TextureFormat::Bgra8Unorm));
}

#[test]
fn srgb_only_surface_is_still_usable() {
    let formats = [TextureFormat::Rgba8UnormSrgb];
    assert_eq!(pick_surface_format(&formats), Some(TextureFormat::Rgba8UnormSrgb));
    assert_eq!(pick_surface_format(&[]), None);
}
