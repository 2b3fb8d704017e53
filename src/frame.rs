use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Timing handed to a page on every animation frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameTime {
    /// Milliseconds since the page controller started.
    pub now_ms: f64,
    pub delta_sec: f32,
    pub elapsed_sec: f32,
}

/// Monotonic page clock shared by the frame loop and event handlers.
#[derive(Clone, Copy, Debug)]
pub struct PageClock {
    epoch: Instant,
    last: Instant,
}

impl Default for PageClock {
    fn default() -> Self {
        Self::new()
    }
}

impl PageClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            epoch: now,
            last: now,
        }
    }

    #[inline]
    pub fn now_ms(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64() * 1000.0
    }

    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = now - self.last;
        self.last = now;
        let since = now - self.epoch;
        FrameTime {
            now_ms: since.as_secs_f64() * 1000.0,
            delta_sec: dt.as_secs_f32(),
            elapsed_sec: since.as_secs_f32(),
        }
    }
}

pub trait PageLoop {
    fn frame(&mut self);
}

pub fn start_loop<P: PageLoop + 'static>(page: Rc<RefCell<P>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        page.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
