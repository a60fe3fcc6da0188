use std::time::Duration;

use sipario::page::{self, content};
use sipario::prelude::*;

const FRAME_MS: u64 = 16;

fn main() {
    env_logger::init();

    let mut director = Director::new(Viewport::new(1440.0, 900.0));
    let landing = page::mount_landing(&mut director);
    println!(
        "mounted landing page: {:.0}px tall, {} logos in the marquee",
        landing.total_height(),
        content::LOGOS.len()
    );

    // Let the hero cascade play out with the page at rest.
    let mut clock = run_frames(&mut director, 0, 2800, "hero entrance");

    // Reader pauses the logo strip by hovering it for a moment.
    director.pointer_enter(landing.hero.logo_strip);
    clock = run_frames(&mut director, clock, 1200, "marquee hovered");
    director.pointer_leave(landing.hero.logo_strip);

    // A leisurely scroll down to the pricing grid.
    clock = scroll_to(&mut director, clock, landing.total_height() - 900.0, 4000);

    // Hover the first pricing tier on the way out.
    director.pointer_enter(landing.pricing.tiers[0]);
    clock = run_frames(&mut director, clock, 400, "tier hovered");
    director.pointer_leave(landing.pricing.tiers[0]);
    clock = run_frames(&mut director, clock, 400, "tier rested");

    let frozen = director.write_count();
    landing.unmount(&mut director);
    director.tick(Duration::from_millis(clock + 10_000));
    assert_eq!(director.write_count(), frozen);
    println!("unmounted; {frozen} visual writes total, none after teardown");
}

/// Run `span_ms` of frames, draining dirty batches, and report how many
/// elements moved during the phase.
fn run_frames(director: &mut Director, start_ms: u64, span_ms: u64, label: &str) -> u64 {
    let mut clock = start_ms;
    let mut touched = 0usize;
    while clock < start_ms + span_ms {
        clock += FRAME_MS;
        director.tick(Duration::from_millis(clock));
        touched += director.take_dirty().len();
    }
    println!("{label}: {touched} element writes over {span_ms}ms");
    clock
}

/// Scroll from the current position to `target` over `span_ms`, eased so
/// the simulated reader slows into the destination.
fn scroll_to(director: &mut Director, start_ms: u64, target: f32, span_ms: u64) -> u64 {
    let from = director.viewport().scroll_y;
    let ease = Easing::QuadInOut;
    let mut clock = start_ms;
    let mut touched = 0usize;
    let steps = span_ms / FRAME_MS;
    for step in 1..=steps {
        clock += FRAME_MS;
        let t = step as f32 / steps as f32;
        let y = from + (target - from) * ease.evaluate(t);
        director.handle_scroll(y);
        director.tick(Duration::from_millis(clock));
        touched += director.take_dirty().len();
    }
    println!(
        "scrolled {from:.0} -> {target:.0}: {touched} element writes over {span_ms}ms"
    );
    clock
}
