//! `reelctl simulate`: bind a headless carousel and replay keys against it.

use std::time::Duration;

use anyhow::Context;
use clap::{Args, ValueEnum};
use reel_carousel::constants::classes;
use reel_carousel::headless::HeadlessDevice;
use reel_carousel::{
    Alignment, Carousel, ItemTemplate, Key, Size, ViewportMode, WrapMode,
};
use reel_config::DeviceConfig;

const TILE_CLASS: &str = "tile";

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum WrapArg {
    None,
    NavigationOnly,
    Visual,
}

impl From<WrapArg> for WrapMode {
    fn from(arg: WrapArg) -> Self {
        match arg {
            WrapArg::None => WrapMode::None,
            WrapArg::NavigationOnly => WrapMode::NavigationOnly,
            WrapArg::Visual => WrapMode::Visual,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ViewportArg {
    None,
    Classes,
    Dom,
}

impl From<ViewportArg> for ViewportMode {
    fn from(arg: ViewportArg) -> Self {
        match arg {
            ViewportArg::None => ViewportMode::None,
            ViewportArg::Classes => ViewportMode::Classes,
            ViewportArg::Dom => ViewportMode::Dom,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum AlignArg {
    Left,
    Center,
    Right,
}

impl From<AlignArg> for Alignment {
    fn from(arg: AlignArg) -> Self {
        match arg {
            AlignArg::Left => Alignment::Left,
            AlignArg::Center => Alignment::Center,
            AlignArg::Right => Alignment::Right,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KeyArg {
    Left,
    Right,
    Up,
    Down,
}

impl From<KeyArg> for Key {
    fn from(arg: KeyArg) -> Self {
        match arg {
            KeyArg::Left => Key::Left,
            KeyArg::Right => Key::Right,
            KeyArg::Up => Key::Up,
            KeyArg::Down => Key::Down,
        }
    }
}

#[derive(Debug, Args)]
pub struct SimulateArgs {
    /// Number of items to bind
    #[arg(long, default_value_t = 10)]
    items: usize,

    /// Width of every item
    #[arg(long, default_value_t = 100.0)]
    item_width: f32,

    /// Width of the visible mask
    #[arg(long, default_value_t = 250.0)]
    mask_width: f32,

    #[arg(long, value_enum, default_value_t = WrapArg::Visual)]
    wrap: WrapArg,

    #[arg(long, value_enum, default_value_t = ViewportArg::None)]
    viewport: ViewportArg,

    /// Items kept attached on each side of the selection (dom viewport)
    #[arg(long, default_value_t = 0)]
    window: usize,

    #[arg(long, value_enum, default_value_t = AlignArg::Center)]
    align: AlignArg,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    align_offset: f32,

    /// Size wrap clones for uneven item widths
    #[arg(long)]
    multi_width: bool,

    /// Move focus before the scroll starts instead of when it lands
    #[arg(long)]
    activate_then_scroll: bool,

    /// Indices of items that cannot take focus
    #[arg(long, value_delimiter = ',')]
    skip: Vec<usize>,

    /// Comma-separated key presses to replay, e.g. `left,left,right`
    #[arg(long, value_enum, value_delimiter = ',')]
    keys: Vec<KeyArg>,

    /// Animation step in milliseconds; 0 jumps every animation to its end
    #[arg(long, default_value_t = 40)]
    frame_ms: u64,
}

pub fn run(args: &SimulateArgs, config: &DeviceConfig) -> anyhow::Result<()> {
    let device = HeadlessDevice::new()
        .size_class(classes::MASK, Size::new(args.mask_width, 0.0))
        .size_class(TILE_CLASS, Size::new(args.item_width, 0.0));
    let mut carousel = Carousel::new("reel", device, config);

    carousel
        .set_wrap_mode(args.wrap.into())
        .context("invalid wrap mode")?;
    carousel
        .set_viewport_mode(args.viewport.into(), args.window)
        .context("invalid viewport mode")?;
    carousel.set_alignment(args.align.into());
    carousel.set_alignment_offset(args.align_offset);
    carousel.set_has_multi_width_items(args.multi_width);
    carousel.set_activate_then_scroll(args.activate_then_scroll);

    carousel.set_data_source(
        (0..args.items)
            .map(|i| {
                let template =
                    ItemTemplate::new(format!("item{i}")).with_class(TILE_CLASS);
                if args.skip.contains(&i) {
                    template.unfocusable()
                } else {
                    template
                }
            })
            .collect(),
    );
    carousel.render();
    carousel.layout_settled().context("failed to bind carousel")?;
    let frame = Duration::from_millis(args.frame_ms);
    settle(&mut carousel, frame);

    println!(
        "bound {} items, {} prefix elements",
        carousel.len(),
        carousel.prefix_clone_count()
    );
    print_strip(&carousel);

    for &key in &args.keys {
        let disposition = carousel.on_key_down(key.into());
        let frames = settle(&mut carousel, frame);
        println!(
            "{key:?}: {disposition:?} selected={} frames={frames}",
            carousel.selected_index()
        );
    }
    print_strip(&carousel);
    Ok(())
}

/// Step animations until none remain. Returns the number of steps taken.
fn settle(carousel: &mut Carousel<HeadlessDevice>, frame: Duration) -> usize {
    if frame.is_zero() {
        carousel.finish_animations();
        return 0;
    }
    let mut frames = 0;
    while carousel.device().pending_animations() > 0 {
        carousel.advance_animations(frame);
        frames += 1;
        if let Some(mask) = carousel.mask_element() {
            tracing::trace!(frame = frames, scroll = carousel.device().scroll_left(mask), "animation step");
        }
    }
    frames
}

fn print_strip(carousel: &Carousel<HeadlessDevice>) {
    let active = carousel.active_item().map(|item| item.id().to_owned());
    let strip: Vec<String> = carousel
        .rendered_ids()
        .into_iter()
        .map(|id| {
            if Some(&id) == active.as_ref() {
                format!("[{id}]")
            } else {
                id
            }
        })
        .collect();
    println!("strip: {}", strip.join(" "));
    if let Some(mask) = carousel.mask_element() {
        println!("scroll: {}", carousel.device().scroll_left(mask));
    }
}
