use eyre::WrapErr;

use inkbox::config::{init_logging, Config};
use inkbox::device::PbmPanel;
use inkbox::graphics::bitmap::load_image_source;
use inkbox::graphics::text::TextBoxStyle;
use inkbox::graphics::typeface::FontCache;
use inkbox::layout::BoxRect;
use inkbox::render::{render_image, render_text_box, ImageBoxStyle, ResizePolicy};
use inkbox::session::{Interrupt, Session};

const IMAGE_PATH: &str = "misc/wow.jpg";
const FRAME_PATH: &str = "frame.pbm";

const TEXT: &str = "The noble Paladin, Tirion Fordring, had always believed the savage Orcs \
    to be vile and corrupt. He had spent his life fighting ceaselessly to protect humanity \
    from their foul treachery. But an unexpected act of honor and compassion sets in motion \
    a chain of events that will challenge Tirion's most fundamental beliefs, and force him \
    to decide once and for all who are the men -- and who are the monsters.";

fn main() -> eyre::Result<()> {
    let config = Config::default();
    init_logging(&config);

    let interrupt = Interrupt::register().wrap_err("installing ctrl + c handler")?;
    let session = Session::new(config.settle, interrupt);
    let mut fonts = FontCache::new(&config.fonts_dir);

    let mut epd = PbmPanel::new(FRAME_PATH);
    let mut canvas = match session.init(&mut epd, false) {
        Ok(canvas) => canvas,
        // already logged; nothing to draw on
        Err(_) => return Ok(()),
    };

    let source = load_image_source(IMAGE_PATH, canvas.width(), canvas.height());
    session.check(&mut epd)?;
    match source {
        Ok(image) => {
            let cropped = ImageBoxStyle {
                resize: ResizePolicy::Crop,
                padding: 3,
                outline: 1,
                ..ImageBoxStyle::default()
            };
            let rotated = ImageBoxStyle {
                resize: ResizePolicy::Aspect,
                rotate: -90.0,
                padding: 2,
                outline: 1,
            };
            for (rect, style) in [
                (BoxRect::new(310, 8, 300, 300), &cropped),
                (BoxRect::new(210, 8, 95, 200), &rotated),
            ] {
                let _ = render_image(&mut canvas, &image, rect, style);
                session.check(&mut epd)?;
            }
        }
        Err(e) => log::warn!("skipping image boxes: {e}"),
    }

    for (rect, font_size) in [
        (BoxRect::new(8, 8, 200, 200), 10),
        (BoxRect::new(8, 210, 300, 150), 26),
    ] {
        let style = TextBoxStyle::with_font_size(font_size);
        if let Ok(lines) = render_text_box(&mut canvas, &mut fonts, TEXT, rect, &style) {
            log::debug!("{lines} lines in text box {rect}");
        }
        session.check(&mut epd)?;
    }

    let _ = session.display(&mut epd, &canvas);
    Ok(())
}
