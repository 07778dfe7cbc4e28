//! # Main Display Module
//!
//! Layout of the single Harmonizer window: a title above three bordered
//! panels (Upload, Configure, Output) laid out side by side.

use iced::widget::{Space, button, column, container, pick_list, row, text, text_input};
use iced::{Alignment, Element, Length};

use harmonizer_core::FormState;
use harmonizer_core::form::BPM_PLACEHOLDER;
use harmonizer_core::options::{Key, NumberOfFiles, NumberOfParts, Speed, TimeSignature};

use crate::Message;

/// Width of the label column inside the Configure and Output panels.
const LABEL_WIDTH: f32 = 130.0;

/// Creates the complete main application view.
pub fn create_main_view<'a>(form: &'a FormState, status: Option<&'a str>) -> Element<'a, Message> {
    let title = container(text("HARMONIZER").size(28))
        .width(Length::Fill)
        .center_x(Length::Fill);

    let panels = row![
        create_upload_panel(form),
        create_configure_panel(form),
        create_output_panel(form, status),
    ]
    .spacing(10)
    .align_y(Alignment::Start);

    container(column![title, Space::with_height(20), panels].spacing(10).padding(20))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// UPLOAD panel: the file button and the current selection.
fn create_upload_panel(form: &FormState) -> Element<'_, Message> {
    let selected = match &form.selected_file_path {
        Some(path) => path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string()),
        None => "No file selected".to_string(),
    };

    let content = column![
        button(text("Select File").size(14)).padding([6, 10]).on_press(Message::SelectFile),
        text(selected).size(12),
    ]
    .spacing(10);

    make_panel("UPLOAD", content.into())
}

/// CONFIGURE panel: meter, tempo and key.
fn create_configure_panel(form: &FormState) -> Element<'_, Message> {
    let content = column![
        labeled(
            "Time Signature:",
            pick_list(TimeSignature::ALL, Some(form.time_signature), Message::TimeSignatureSelected).into(),
        ),
        labeled(
            "Beats Per Minute:",
            text_input(BPM_PLACEHOLDER, &form.beats_per_minute)
                .on_input(Message::BeatsPerMinuteChanged)
                .width(Length::Fixed(100.0))
                .into(),
        ),
        labeled("Key:", pick_list(Key::ALL, Some(form.key), Message::KeySelected).into()),
    ]
    .spacing(40);

    make_panel("CONFIGURE", content.into())
}

/// OUTPUT panel: score options, the Harmonize button and launch feedback.
fn create_output_panel<'a>(form: &'a FormState, status: Option<&'a str>) -> Element<'a, Message> {
    let mut content = column![
        labeled(
            "Number of Files:",
            pick_list(NumberOfFiles::ALL, Some(form.number_of_files), Message::NumberOfFilesSelected).into(),
        ),
        labeled(
            "Number of Parts:",
            pick_list(NumberOfParts::ALL, Some(form.number_of_parts), Message::NumberOfPartsSelected).into(),
        ),
        labeled("Speed:", pick_list(Speed::ALL, Some(form.speed), Message::SpeedSelected).into()),
        Space::with_height(20),
        button(text("Harmonize").size(18)).padding([12, 20]).on_press(Message::Harmonize),
    ]
    .spacing(20);

    if let Some(status) = status {
        content = content.push(text(status).size(12));
    }

    make_panel("OUTPUT", content.into())
}

/// A control with its label to the left.
fn labeled<'a>(label: &'static str, control: Element<'a, Message>) -> Element<'a, Message> {
    row![text(label).size(14).width(Length::Fixed(LABEL_WIDTH)), control]
        .spacing(10)
        .align_y(Alignment::Center)
        .into()
}

/// Wraps panel content in a titled, bordered box.
fn make_panel<'a>(title: &'static str, content: Element<'a, Message>) -> Element<'a, Message> {
    container(column![text(title).size(16), Space::with_height(10), content].spacing(5))
        .padding(15)
        .width(Length::FillPortion(1))
        .height(Length::Fill)
        .style(container::bordered_box)
        .into()
}
