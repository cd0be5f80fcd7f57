//! Integration tests for the screenloop UI core, run on the host.

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use embassy_futures::block_on;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use screenloop::widgets::{Label, Menu, Spinner};
use screenloop::{
    on_button_notification, ButtonId, ButtonNotification, Canvas, Composition, Mailbox, Screen,
    SubCanvas, UiEvent, UiWorker, View,
};

/// Counts pixel writes and presented frames.
#[derive(Default)]
struct Recorder {
    pixels: usize,
    frames: usize,
}

impl OriginDimensions for Recorder {
    fn size(&self) -> Size {
        Size::new(128, 64)
    }
}

impl DrawTarget for Recorder {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.pixels += pixels.into_iter().count();
        Ok(())
    }
}

impl Canvas for Recorder {
    fn present(&mut self) -> Result<(), Self::Error> {
        self.frames += 1;
        Ok(())
    }
}

type Trace = Rc<RefCell<Vec<String>>>;

/// View that records calls and, optionally, every pressed button id.
struct Tracer {
    name: &'static str,
    consumes: bool,
    trace: Trace,
}

impl Tracer {
    fn new(name: &'static str, consumes: bool, trace: &Trace) -> Self {
        Self {
            name,
            consumes,
            trace: trace.clone(),
        }
    }
}

impl View<Recorder> for Tracer {
    fn bounds(&self) -> Rectangle {
        Rectangle::new(Point::zero(), Size::new(8, 8))
    }

    fn draw(&self, _canvas: &mut SubCanvas<'_, Recorder>) {
        self.trace.borrow_mut().push(format!("draw {}", self.name));
    }

    fn handle_input(&mut self, event: &UiEvent) -> bool {
        match event.pressed() {
            Some(id) => self.trace.borrow_mut().push(format!("{} {}", self.name, id.0)),
            None => self.trace.borrow_mut().push(format!("{} other", self.name)),
        }
        self.consumes
    }
}

fn whole_display<'v>() -> Composition<'v, Recorder> {
    Composition::new(
        Rectangle::new(Point::zero(), Size::new(128, 64)),
        BinaryColor::Off,
    )
}

const BTN_1: ButtonId = ButtonId(1);
const BTN_2: ButtonId = ButtonId(2);

#[test]
fn pressed_button_goes_to_newest_view_then_redraws_in_order() {
    let trace: Trace = Rc::default();
    let mut a = Tracer::new("A", true, &trace);
    let mut b = Tracer::new("B", true, &trace);
    let mut screen = whole_display();
    screen.add_view(&mut a).unwrap();
    screen.add_view(&mut b).unwrap();

    let mailbox: Mailbox<8> = Mailbox::new();
    let mut worker = UiWorker::new(&mailbox, Recorder::default());
    worker.set_screen(&mut screen);
    let redraws_before = worker.stats().redraws;
    trace.borrow_mut().clear();

    assert!(worker.add_event(UiEvent::button_pressed(BTN_1)));
    block_on(worker.step());

    assert_eq!(*trace.borrow(), ["B 1", "draw A", "draw B"]);
    assert_eq!(worker.stats().redraws, redraws_before + 1);
    assert!(mailbox.is_empty());
}

#[test]
fn event_without_active_screen_is_dropped_safely() {
    let mailbox: Mailbox<8> = Mailbox::new();
    let mut worker: UiWorker<'_, '_, Recorder, 8> = UiWorker::new(&mailbox, Recorder::default());

    worker.add_event(UiEvent::button_pressed(BTN_2));
    block_on(worker.step());

    assert!(mailbox.is_empty());
    assert_eq!(worker.canvas().pixels, 0);
    assert_eq!(worker.canvas().frames, 0);
    assert_eq!(worker.stats().unrouted, 1);
}

#[test]
fn redraw_issues_one_draw_per_view_in_composition_order() {
    let trace: Trace = Rc::default();
    let mut views: Vec<Tracer> = ["v0", "v1", "v2", "v3", "v4"]
        .into_iter()
        .map(|name| Tracer::new(name, false, &trace))
        .collect();

    let mut screen = whole_display();
    for view in views.iter_mut() {
        screen.add_view(view).unwrap();
    }
    screen.attach();
    let mut canvas = Recorder::default();
    screen.redraw(&mut canvas);

    assert_eq!(
        *trace.borrow(),
        ["draw v0", "draw v1", "draw v2", "draw v3", "draw v4"]
    );
}

#[test]
fn attach_detach_never_changes_membership() {
    let trace: Trace = Rc::default();
    let mut a = Tracer::new("A", false, &trace);
    let mut screen = whole_display();
    screen.add_view(&mut a).unwrap();

    screen.attach();
    screen.attach();
    screen.detach();
    screen.detach();

    assert_eq!(screen.view_count(), 1);
    assert!(!screen.is_attached());
}

#[test]
fn interleaved_producers_keep_their_own_order() {
    const PRODUCERS: u8 = 3;
    const PER_PRODUCER: u8 = 40;

    let trace: Trace = Rc::default();
    let mut sink = Tracer::new("S", false, &trace);
    let mut screen = whole_display();
    screen.add_view(&mut sink).unwrap();

    let mailbox: Mailbox<8> = Mailbox::new();
    let mut worker = UiWorker::new(&mailbox, Recorder::default());
    worker.set_screen(&mut screen);
    trace.borrow_mut().clear();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..PRODUCERS)
            .map(|p| {
                let mailbox = &mailbox;
                s.spawn(move || {
                    for seq in 0..PER_PRODUCER {
                        let id = ButtonId(p * PER_PRODUCER + seq);
                        on_button_notification(mailbox, ButtonNotification { button: id, pressed: true });
                        std::thread::yield_now();
                    }
                })
            })
            .collect();

        while handles.iter().any(|h| !h.is_finished()) {
            worker.try_step();
        }
    });
    worker.try_step();

    let seen: Vec<u8> = trace
        .borrow()
        .iter()
        .filter_map(|line| line.strip_prefix("S "))
        .filter_map(|id| id.parse().ok())
        .collect();
    assert!(!seen.is_empty());

    for p in 0..PRODUCERS {
        let range = p * PER_PRODUCER..(p + 1) * PER_PRODUCER;
        let own: Vec<u8> = seen.iter().copied().filter(|id| range.contains(id)).collect();
        assert!(own.windows(2).all(|w| w[0] < w[1]), "producer {p} reordered: {own:?}");
    }
    assert_eq!(
        seen.len() as u32 + mailbox.overflowed(),
        u32::from(PRODUCERS) * u32::from(PER_PRODUCER)
    );
}

#[test]
fn notifications_before_worker_are_not_consumed_or_queued() {
    let mailbox: Mailbox<8> = Mailbox::new();
    let n = ButtonNotification {
        button: ButtonId::SELECT,
        pressed: true,
    };

    assert!(!on_button_notification(&mailbox, n));
    assert!(mailbox.is_empty());

    let worker: UiWorker<'_, '_, Recorder, 8> = UiWorker::new(&mailbox, Recorder::default());
    assert!(!on_button_notification(&mailbox, n));
    assert_eq!(mailbox.len(), 1);

    drop(worker);
    assert!(!mailbox.is_online());
    assert!(mailbox.is_empty());
}

#[test]
fn stock_widgets_drive_a_menu_screen() {
    let mut title = Label::new(Point::zero(), 128, "Menu");
    let mut menu: Menu<4> = Menu::new(Rectangle::new(Point::new(0, 12), Size::new(128, 40)));
    for item in ["Alpha", "Beta", "Gamma"] {
        assert!(menu.push(item));
    }
    let mut spinner = Spinner::new(Point::new(0, 54), 128, "Busy");

    {
        let mut screen = whole_display();
        screen.add_view(&mut title).unwrap();
        screen.add_view(&mut menu).unwrap();
        screen.add_view(&mut spinner).unwrap();

        let mailbox: Mailbox<8> = Mailbox::new();
        let mut worker = UiWorker::new(&mailbox, Recorder::default());
        worker.set_screen(&mut screen);
        assert!(worker.canvas().pixels > 0);

        worker.add_event(UiEvent::button_pressed(ButtonId::DOWN));
        worker.add_event(UiEvent::button_released(ButtonId::DOWN));
        worker.add_event(UiEvent::button_pressed(ButtonId::DOWN));
        worker.add_event(UiEvent::button_pressed(ButtonId::SELECT));
        worker.add_event(UiEvent::Tick);
        block_on(worker.step());

        assert_eq!(worker.stats().events, 5);
        assert_eq!(worker.stats().handled, 4);
        assert_eq!(worker.stats().redraws, 2);
        assert_eq!(worker.canvas().frames, 2);
    }

    assert_eq!(menu.selected(), 2);
    assert_eq!(menu.confirmed(), Some(2));
    assert_eq!(spinner.frame(), 1);
}
