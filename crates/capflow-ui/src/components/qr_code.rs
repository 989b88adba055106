//! QR code display for the MFA provisioning URL.

use dioxus::prelude::*;
use qrcode::render::svg;
use qrcode::QrCode as Encoder;

/// Props for the QR code component.
#[derive(Props, Clone, PartialEq)]
pub struct QrCodeProps {
    /// Data to encode (an otpauth:// URL)
    pub data: String,
    /// Minimum render quality in pixels; CSS controls the displayed size
    #[props(default = 180)]
    pub size: u32,
}

/// QR code component.
///
/// The SVG is rendered with a viewBox for quality but width/height
/// attributes are removed so CSS can control the actual display size
/// responsively.
#[component]
pub fn QrCode(props: QrCodeProps) -> Element {
    let qr_svg = use_memo(move || match Encoder::new(props.data.as_bytes()) {
        Ok(code) => {
            let svg_string = code
                .render()
                .min_dimensions(props.size, props.size)
                .dark_color(svg::Color("#12263a"))
                .light_color(svg::Color("transparent"))
                .build();

            // Strip explicit dimensions, keep the viewBox for scaling.
            svg_string.replace(
                &format!("width=\"{}\" height=\"{}\" ", props.size, props.size),
                "",
            )
        }
        Err(e) => {
            tracing::error!("Failed to generate QR code: {:?}", e);
            String::new()
        }
    });

    rsx! {
        if !qr_svg().is_empty() {
            div {
                class: "qr-code",
                dangerous_inner_html: "{qr_svg()}",
            }
        } else {
            div { class: "qr-error", "Failed to generate QR code" }
        }
    }
}
