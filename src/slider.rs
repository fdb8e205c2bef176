use std::rc::Rc;

use log::debug;
use yew::Reducible;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Direction::Left),
            "ArrowRight" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Everything that can drive the hero slider.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SliderMsg {
    Tick,
    Select(usize),
    HoverEnter,
    HoverLeave,
    Arrow(Direction),
    VisibilityChanged { hidden: bool },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Running,
    Paused,
    /// No slides; nothing ever happens.
    Inert,
}

/// Cursor and timer state of the hero slider.
///
/// `timer` is the generation of the live auto-advance timer. It is `Some`
/// exactly when the slider is running, and every (re)start hands out a fresh
/// generation, so whoever owns the real interval can drop the old one and
/// start counting from zero again.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SliderState {
    len: usize,
    cursor: usize,
    mode: Mode,
    timer: Option<u64>,
    next_generation: u64,
}

impl SliderState {
    pub fn new(len: usize) -> Self {
        if len == 0 {
            return Self {
                len,
                cursor: 0,
                mode: Mode::Inert,
                timer: None,
                next_generation: 0,
            };
        }
        Self {
            len,
            cursor: 0,
            mode: Mode::Running,
            timer: Some(0),
            next_generation: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn timer(&self) -> Option<u64> {
        self.timer
    }

    /// Screen reader text for the visible slide, empty when there is none.
    pub fn position_label(&self) -> String {
        if self.mode == Mode::Inert {
            return String::new();
        }
        format!("Slide {} of {}", self.cursor() + 1, self.len)
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.mode != Mode::Inert && index == self.cursor
    }

    pub fn apply(&self, msg: SliderMsg) -> Self {
        let mut next = self.clone();
        if next.mode == Mode::Inert {
            return next;
        }

        match msg {
            SliderMsg::Tick => {
                if next.mode == Mode::Running {
                    next.cursor = (next.cursor + 1) % next.len;
                }
            }
            SliderMsg::Select(index) => {
                if index < next.len {
                    next.manual_move(index);
                }
            }
            SliderMsg::Arrow(Direction::Left) => {
                let prev = (next.cursor + next.len - 1) % next.len;
                next.manual_move(prev);
            }
            SliderMsg::Arrow(Direction::Right) => {
                let following = (next.cursor + 1) % next.len;
                next.manual_move(following);
            }
            SliderMsg::HoverEnter | SliderMsg::VisibilityChanged { hidden: true } => next.pause(),
            SliderMsg::HoverLeave | SliderMsg::VisibilityChanged { hidden: false } => next.start(),
        }
        next
    }

    fn manual_move(&mut self, index: usize) {
        self.pause();
        self.cursor = index;
        self.start();
    }

    fn pause(&mut self) {
        self.timer = None;
        self.mode = Mode::Paused;
    }

    fn start(&mut self) {
        // Always a fresh generation, even when already running.
        self.timer = Some(self.next_generation);
        self.next_generation += 1;
        self.mode = Mode::Running;
    }
}

impl Reducible for SliderState {
    type Action = SliderMsg;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next.cursor != self.cursor || next.mode != self.mode {
            debug!(
                "Slider {:?} -> slide {} ({:?})",
                action, next.cursor, next.mode
            );
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_count(state: &SliderState) -> usize {
        (0..state.len()).filter(|&i| state.is_active(i)).count()
    }

    #[test]
    fn starts_running_on_first_slide() {
        let state = SliderState::new(3);
        assert_eq!(state.cursor(), 0);
        assert_eq!(state.mode(), Mode::Running);
        assert!(state.timer().is_some());
        assert!(state.is_active(0));
    }

    #[test]
    fn position_label_follows_the_cursor() {
        let state = SliderState::new(3);
        assert_eq!(state.position_label(), "Slide 1 of 3");
        let state = state.apply(SliderMsg::Arrow(Direction::Left));
        assert_eq!(state.position_label(), "Slide 3 of 3");
        assert_eq!(SliderState::new(0).position_label(), "");
    }

    #[test]
    fn n_ticks_return_to_start() {
        for len in 1..=7 {
            let mut state = SliderState::new(len).apply(SliderMsg::Select(len / 2));
            let start = state.cursor();
            for _ in 0..len {
                state = state.apply(SliderMsg::Tick);
            }
            assert_eq!(state.cursor(), start, "len {}", len);
        }
    }

    #[test]
    fn exactly_one_active_through_every_transition() {
        let msgs = [
            SliderMsg::Tick,
            SliderMsg::HoverEnter,
            SliderMsg::Tick,
            SliderMsg::Arrow(Direction::Left),
            SliderMsg::Arrow(Direction::Left),
            SliderMsg::Select(3),
            SliderMsg::HoverLeave,
            SliderMsg::Arrow(Direction::Right),
            SliderMsg::VisibilityChanged { hidden: true },
            SliderMsg::VisibilityChanged { hidden: false },
            SliderMsg::Select(99),
            SliderMsg::Tick,
        ];
        let mut state = SliderState::new(4);
        assert_eq!(active_count(&state), 1);
        for msg in msgs {
            state = state.apply(msg);
            assert_eq!(active_count(&state), 1, "after {:?}", msg);
        }
    }

    #[test]
    fn arrows_wrap_both_ways() {
        let state = SliderState::new(3).apply(SliderMsg::Arrow(Direction::Left));
        assert_eq!(state.cursor(), 2);
        let state = state.apply(SliderMsg::Arrow(Direction::Right));
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn ticks_are_ignored_while_paused() {
        let state = SliderState::new(3)
            .apply(SliderMsg::HoverEnter)
            .apply(SliderMsg::Tick)
            .apply(SliderMsg::Tick);
        assert_eq!(state.cursor(), 0);
        assert_eq!(state.mode(), Mode::Paused);
        assert_eq!(state.timer(), None);
    }

    #[test]
    fn manual_moves_restart_the_countdown() {
        let state = SliderState::new(5);
        let before = state.timer();
        let state = state.apply(SliderMsg::Select(2));
        assert_eq!(state.cursor(), 2);
        assert_eq!(state.mode(), Mode::Running);
        assert!(state.timer().is_some());
        assert_ne!(state.timer(), before);
    }

    #[test]
    fn double_pause_then_resume_leaves_one_timer() {
        let interval = 5000u32;
        let state = SliderState::new(4)
            .apply(SliderMsg::HoverEnter)
            .apply(SliderMsg::VisibilityChanged { hidden: true })
            .apply(SliderMsg::HoverLeave);

        // Simulated clock: only the live generation may fire.
        let live = state.timer().expect("running after resume");
        let mut fired = Vec::new();
        let mut state = state;
        for elapsed in (interval..=interval * 3).step_by(interval as usize) {
            if let Some(generation) = state.timer() {
                fired.push((elapsed, generation));
                state = state.apply(SliderMsg::Tick);
            }
        }
        assert_eq!(fired, vec![(5000, live), (10000, live), (15000, live)]);
        assert_eq!(state.cursor(), 3);
    }

    #[test]
    fn hidden_tab_pauses_and_visible_resumes() {
        let state = SliderState::new(2).apply(SliderMsg::VisibilityChanged { hidden: true });
        assert_eq!(state.mode(), Mode::Paused);
        let state = state.apply(SliderMsg::VisibilityChanged { hidden: false });
        assert_eq!(state.mode(), Mode::Running);
    }

    #[test]
    fn empty_slider_is_inert() {
        let mut state = SliderState::new(0);
        for msg in [
            SliderMsg::Tick,
            SliderMsg::Select(0),
            SliderMsg::Arrow(Direction::Left),
            SliderMsg::HoverLeave,
        ] {
            state = state.apply(msg);
        }
        assert_eq!(state.mode(), Mode::Inert);
        assert_eq!(state.timer(), None);
        assert!(!state.is_active(0));
    }

    #[test]
    fn only_arrow_keys_map_to_directions() {
        assert_eq!(Direction::from_key("ArrowLeft"), Some(Direction::Left));
        assert_eq!(Direction::from_key("ArrowRight"), Some(Direction::Right));
        assert_eq!(Direction::from_key("ArrowUp"), None);
    }
}
