use slideshow::constants::{FADE_DURATION, FRAME_TIME};
use slideshow::{
    Container, ElementId, Registry, SlideDescriptor, Slideshow, SlideshowOptions, TransitionPhase,
};

fn page_container(id: u64) -> Container {
    Container::new(ElementId(id))
        .with_region("ui-caption")
        .with_region("ui-heading")
}

fn numbered(n: usize) -> SlideshowOptions {
    SlideshowOptions::default().with_slides(
        (0..n)
            .map(|i| SlideDescriptor::new(format!("{i}.jpg")).with_caption(format!("caption {i}")))
            .collect(),
    )
}

fn run_for(show: &mut Slideshow, seconds: f32) {
    let frames = (seconds / FRAME_TIME).ceil() as usize + 1;
    for _ in 0..frames {
        show.update(FRAME_TIME);
    }
}

fn visible_count(show: &Slideshow) -> usize {
    show.slides().iter().filter(|s| s.fader.visible).count()
}

#[test]
fn two_slide_scenario() {
    let options = SlideshowOptions::default()
        .with_time_interval_ms(5000)
        .with_slides(vec![
            SlideDescriptor::new("a.jpg").with_caption("A").with_heading("H1"),
            SlideDescriptor::new("b.jpg").with_caption("B").with_heading("H2"),
        ]);
    let mut show = Slideshow::create(Some(page_container(1)), options).unwrap();

    assert_eq!(show.current_slide().map(|s| s.id.as_str()), Some("ui-slideshow-0"));
    assert_eq!(show.caption(), Some("A"));
    assert_eq!(show.heading(), Some("H1"));

    // One interval plus both fades
    run_for(&mut show, 5.0 + 2.0 * FADE_DURATION + 0.1);

    assert_eq!(show.current_index(), 1);
    assert_eq!(show.phase(), TransitionPhase::Idle);
    assert_eq!(show.caption(), Some("B"));
    assert_eq!(show.heading(), Some("H2"));
    assert!(show.slides()[1].fader.visible);
    assert_eq!(visible_count(&show), 1);
}

#[test]
fn unready_slide_holds_the_current_one() {
    let options = SlideshowOptions::default().with_slides(vec![
        SlideDescriptor::new("a.jpg").with_caption("A").with_heading("H1"),
        SlideDescriptor::new("b.jpg").with_caption("B").with_heading("H2"),
    ]);
    let mut show = Slideshow::create(Some(page_container(1)), options).unwrap();
    show.set_ready(1, false);

    run_for(&mut show, 5.5);

    assert_eq!(show.current_index(), 0);
    assert!(show.phase().is_idle());
    assert_eq!(show.caption(), Some("A"));
    assert_eq!(show.heading(), Some("H1"));
    assert!(!show.slides()[0].fader.is_animating());

    // Retried on the next interval once ready
    show.set_ready(1, true);
    run_for(&mut show, 5.0 + 2.0 * FADE_DURATION);
    assert_eq!(show.current_index(), 1);
}

#[test]
fn full_cycle_returns_to_start() {
    for n in 2..=5 {
        let mut show = Slideshow::create(Some(page_container(1)), numbered(n)).unwrap();
        let mut seen = vec![show.current_index()];

        for _ in 0..n {
            assert!(show.tick());
            run_for(&mut show, 2.0 * FADE_DURATION + 0.1);
            assert!(show.phase().is_idle());
            assert_eq!(visible_count(&show), 1);
            seen.push(show.current_index());
        }

        let expected: Vec<usize> = (0..=n).map(|i| i % n).collect();
        assert_eq!(seen, expected, "round robin over {n} slides");
        assert_eq!(show.caption(), Some("caption 0"));
    }
}

#[test]
fn short_interval_does_not_interleave_transitions() {
    // Interval shorter than a full fade cycle
    let mut show =
        Slideshow::create(Some(page_container(1)), numbered(3).with_time_interval_ms(100)).unwrap();

    let mut last = show.current_index();
    for _ in 0..600 {
        show.update(FRAME_TIME);
        let now = show.current_index();
        if now != last {
            assert_eq!(now, (last + 1) % 3);
            last = now;
        }
        if show.phase().is_idle() {
            assert_eq!(visible_count(&show), 1);
        }
    }
    assert!(show.current_index() < 3);
}

#[test]
fn empty_slideshow_is_stable() {
    let mut show = Slideshow::create(Some(page_container(1)), SlideshowOptions::default()).unwrap();
    for _ in 0..10 {
        show.tick();
    }
    run_for(&mut show, 30.0);
    assert_eq!(visible_count(&show), 0);
    assert_eq!(show.current_index(), 0);
}

#[test]
fn double_attach_yields_one_instance() {
    let mut registry = Registry::new();
    registry.attach(Some(page_container(7)), numbered(3));
    registry.attach(Some(page_container(7)), numbered(3));

    assert_eq!(registry.len(), 1);
    let show = registry.get(ElementId(7)).unwrap();
    assert!(show.container().wrapper.is_some());
    assert_eq!(show.slide_count(), 3);

    // A single timer: one interval moves exactly one slide
    for _ in 0..((5.0 + 2.0 * FADE_DURATION + 0.3) / FRAME_TIME) as usize {
        registry.update(FRAME_TIME);
    }
    assert_eq!(registry.get(ElementId(7)).unwrap().current_index(), 1);
}

#[test]
fn detached_container_can_be_reused() {
    let mut registry = Registry::new();
    registry.attach(Some(page_container(3)), numbered(2));
    let container = registry.detach(ElementId(3)).unwrap();

    assert!(container.wrapper.is_none());
    let show = registry.attach(Some(container), numbered(4)).unwrap();
    assert_eq!(show.slide_count(), 4);
    assert_eq!(show.caption(), Some("caption 0"));
}
