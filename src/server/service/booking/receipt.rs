//! PDF receipt rendering.

use printpdf::{BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfLayerReference, Rect, Rgb};
use qrcode::QrCode;

use crate::{
    model::booking::{format_rupees, BookingDto, BookingStatusDto, PaymentStatusDto},
    server::error::Error,
};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;
const LINE_HEIGHT_MM: f32 = 9.0;
const QR_SIZE_MM: f32 = 50.0;

/// Text encoded in the receipt QR code, checked by temple staff at the gate.
pub fn qr_payload(booking: &BookingDto) -> String {
    format!(
        "{}|{}|{}|{}",
        booking.receipt_number,
        booking.visit_date,
        booking.number_of_persons,
        booking_status_label(booking.status)
    )
}

/// Renders an A4 receipt for `booking`
pub fn render_receipt(booking: &BookingDto) -> Result<Vec<u8>, Error> {
    let (doc, page, layer) = PdfDocument::new(
        format!("Darshan receipt {}", booking.receipt_number),
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Receipt",
    );
    let layer = doc.get_page(page).get_layer(layer);

    let title_font = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(receipt_error)?;
    let body_font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(receipt_error)?;

    let mut y = PAGE_HEIGHT_MM - MARGIN_MM;
    layer.use_text("Kashi Darshan", 22.0, Mm(MARGIN_MM), Mm(y), &title_font);
    y -= LINE_HEIGHT_MM;
    layer.use_text("Darshan booking receipt", 13.0, Mm(MARGIN_MM), Mm(y), &body_font);
    y -= LINE_HEIGHT_MM * 1.5;

    for (label, value) in receipt_lines(booking) {
        write_field(&layer, &title_font, &body_font, y, label, &value);
        y -= LINE_HEIGHT_MM;
    }

    draw_qr_code(
        &layer,
        &qr_payload(booking),
        PAGE_WIDTH_MM - MARGIN_MM - QR_SIZE_MM,
        PAGE_HEIGHT_MM - MARGIN_MM - QR_SIZE_MM,
    )?;

    layer.use_text(
        "Please carry this receipt and a photo ID to the temple entrance.",
        10.0,
        Mm(MARGIN_MM),
        Mm(MARGIN_MM),
        &body_font,
    );

    doc.save_to_bytes().map_err(receipt_error)
}

fn receipt_lines(booking: &BookingDto) -> Vec<(&'static str, String)> {
    vec![
        ("Receipt number", booking.receipt_number.clone()),
        ("Temple", booking.jyotirlinga_name.en.clone()),
        ("Darshan", booking.darshan_type_name.en.clone()),
        ("Visit date", booking.visit_date.format("%d %b %Y").to_string()),
        (
            "Time slot",
            format!(
                "{} - {}",
                booking.start_time.format("%H:%M"),
                booking.end_time.format("%H:%M")
            ),
        ),
        ("Persons", booking.number_of_persons.to_string()),
        ("Devotee", booking.devotee_name.clone()),
        ("Phone", booking.devotee_phone.clone()),
        // The builtin fonts have no rupee sign
        ("Amount", format!("INR {}", format_rupees(booking.total_amount_paise))),
        ("Booking status", booking_status_label(booking.status).to_string()),
        ("Payment status", payment_status_label(booking.payment_status).to_string()),
    ]
}

fn write_field(
    layer: &PdfLayerReference,
    label_font: &IndirectFontRef,
    value_font: &IndirectFontRef,
    y: f32,
    label: &str,
    value: &str,
) {
    layer.use_text(label, 11.0, Mm(MARGIN_MM), Mm(y), label_font);
    layer.use_text(value, 11.0, Mm(MARGIN_MM + 45.0), Mm(y), value_font);
}

/// Draws the QR code for `payload` with its lower left corner at (`x`, `y`)
fn draw_qr_code(layer: &PdfLayerReference, payload: &str, x: f32, y: f32) -> Result<(), Error> {
    let code = QrCode::new(payload.as_bytes()).map_err(receipt_error)?;
    let width = code.width();
    let module = QR_SIZE_MM / width as f32;

    layer.set_fill_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
    for (index, color) in code.to_colors().into_iter().enumerate() {
        if color != qrcode::Color::Dark {
            continue;
        }

        let column = (index % width) as f32;
        let row = (index / width) as f32;
        // PDF coordinates grow upwards, QR rows grow downwards
        let left = x + column * module;
        let top = y + QR_SIZE_MM - row * module;
        layer.add_rect(Rect::new(
            Mm(left),
            Mm(top - module),
            Mm(left + module),
            Mm(top),
        ));
    }

    Ok(())
}

fn booking_status_label(status: BookingStatusDto) -> &'static str {
    match status {
        BookingStatusDto::Confirmed => "confirmed",
        BookingStatusDto::Cancelled => "cancelled",
        BookingStatusDto::Completed => "completed",
    }
}

fn payment_status_label(status: PaymentStatusDto) -> &'static str {
    match status {
        PaymentStatusDto::Pending => "pending",
        PaymentStatusDto::Completed => "completed",
        PaymentStatusDto::Failed => "failed",
        PaymentStatusDto::Refunded => "refunded",
    }
}

fn receipt_error(err: impl std::fmt::Display) -> Error {
    Error::ReceiptError(err.to_string())
}
