//! Foreground controller
//!
//! One [`Controller::poll`] is one pass of the cooperative foreground loop:
//!
//! 1. consume the interruption signal (cancels a running session)
//! 2. report button activity and resync the LED after an unfreeze
//! 3. run the handler for the current state
//! 4. run the blink cadence while a session is active
//!
//! The caller decides how to wait between passes. When `poll` returns
//! [`Activity::Waiting`] nothing can change until an interrupt fires.

use heapless::spsc::Consumer;

use digilux_hal::{IndicatorOutput, PeriodicTimer, SerialPort};

use crate::blink::BlinkController;
use crate::button::{ButtonMonitor, ButtonReport, LockChange};
use crate::clock::Millis;
use crate::config::AppConfig;
use crate::context::Context;
use crate::error::Error;
use crate::filter::{filter, DigitSequence};
use crate::input::InputCollector;
use crate::led::LedState;
use crate::report;
use crate::scheduler::{apply_digit, AnalysisSession, Parity};
use crate::state::{Effects, Event, State};

/// Hardware collaborators driven by the controller
#[derive(Debug)]
pub struct Peripherals<S, T, L> {
    /// Operator console
    pub serial: S,
    /// Millisecond tick source
    pub timer: T,
    /// LED driver
    pub indicator: L,
}

/// Outcome of one foreground pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Activity {
    /// Something happened; poll again before waiting
    Busy,
    /// Nothing to do until the next interrupt
    Waiting,
}

/// Foreground scheduler and sole owner of session state
pub struct Controller<'a, S, T, L, const N: usize> {
    ctx: &'a Context,
    input: InputCollector<'a, N>,
    hw: Peripherals<S, T, L>,
    config: AppConfig,
    state: State,
    pending: Option<DigitSequence>,
    session: Option<AnalysisSession>,
    blink: BlinkController,
    led: LedState,
    monitor: ButtonMonitor,
    /// Digits analyzed since boot, wrapping
    analyses: u32,
    /// `analyses` when the lock was seen during a session
    locked_at: Option<u32>,
}

impl<'a, S, T, L, const N: usize> Controller<'a, S, T, L, N>
where
    S: SerialPort,
    T: PeriodicTimer,
    L: IndicatorOutput,
{
    /// Create a controller reading from `rx`
    pub fn new(
        ctx: &'a Context,
        rx: Consumer<'a, u8, N>,
        hw: Peripherals<S, T, L>,
        config: AppConfig,
    ) -> Self {
        Self {
            ctx,
            input: InputCollector::new(rx, config.echo),
            hw,
            config,
            state: State::Idle,
            pending: None,
            session: None,
            blink: BlinkController::new(),
            led: LedState::new(),
            monitor: ButtonMonitor::new(),
            analyses: 0,
            locked_at: None,
        }
    }

    /// Print the banner, force the LED off and show the prompt
    pub fn boot(&mut self) {
        self.hw.timer.disable();
        self.ctx.set_session_active(false);
        report::banner(&mut self.hw.serial);

        self.input.reset();
        self.input.discard_pending();
        let frozen = self.ctx.button.is_frozen();
        self.led.set(false, frozen, &mut self.hw.indicator);

        self.state = State::Idle;
        report::prompt(&mut self.hw.serial);
    }

    /// Run one foreground pass
    pub fn poll(&mut self) -> Activity {
        let now = self.ctx.clock.now();
        let mut busy = false;

        if self.ctx.take_interrupt() {
            self.dispatch(Event::Interrupted, now);
            busy = true;
        }

        if let Some(report) = self.monitor.poll(&self.ctx.button) {
            self.on_button(report, now);
            busy = true;
        }

        let event = self.next_event(now);
        let ended = matches!(event, Some(Event::SequenceDone { .. }));
        if let Some(event) = event {
            self.dispatch(event, now);
            busy = true;
        }

        // A finished sequence gets no blink check in the same pass
        if !ended && self.state.blink_allowed() && self.blink.due(now, self.config.blink_cadence_ms)
        {
            let frozen = self.ctx.button.is_frozen();
            let on = self.led.toggle(frozen, &mut self.hw.indicator);
            if self.config.report_blink_toggles {
                report::blink_toggled(&mut self.hw.serial, on);
            }
            busy = true;
        }

        if busy {
            Activity::Busy
        } else {
            Activity::Waiting
        }
    }

    fn next_event(&mut self, now: Millis) -> Option<Event> {
        match self.state {
            State::Idle => self.input.has_pending().then_some(Event::ByteArrived),
            State::Receiving => {
                let done = self.input.poll(&mut self.hw.serial)?;
                match done.and_then(|()| filter(self.input.line().as_str())) {
                    Ok(sequence) => {
                        self.pending = Some(sequence);
                        Some(Event::LineAccepted)
                    }
                    Err(e) => Some(Event::LineRejected(e)),
                }
            }
            State::Starting => Some(Event::SessionStarted),
            State::AnalyzingDigit => {
                let blinking = self.blink.is_active();
                match self.session.as_mut() {
                    Some(session) => session.poll(now, self.config.digit_cadence_ms, blinking),
                    None => {
                        self.recover(Error::UnreachableState);
                        None
                    }
                }
            }
            State::ContinuousBlink => None,
        }
    }

    fn dispatch(&mut self, event: Event, now: Millis) {
        match self.state.transition(event) {
            Ok((next, effects)) => {
                self.announce(event);
                self.state = next;
                if let Err(e) = self.apply(effects, now) {
                    self.recover(e);
                }
            }
            Err(e) => self.recover(e),
        }
    }

    /// Print the notice that belongs to an accepted event
    fn announce(&mut self, event: Event) {
        let out = &mut self.hw.serial;
        match event {
            Event::LineAccepted => {
                if self.pending.as_ref().is_some_and(DigitSequence::is_continuous) {
                    report::continuous_detected(out);
                }
            }
            Event::LineRejected(e) => report::error(out, e),
            Event::SessionStarted => report::starting(out),
            Event::SequenceWrapped => {
                report::complete(out);
                report::restarting(out);
            }
            Event::SequenceDone { blinking } => {
                report::complete(out);
                if blinking {
                    report::continuous_blink(out);
                }
            }
            Event::Interrupted if self.state.is_session() => report::interrupted(out),
            _ => {}
        }
    }

    fn apply(&mut self, fx: Effects, now: Millis) -> Result<(), Error> {
        let frozen = self.ctx.button.is_frozen();

        if fx.arm {
            let sequence = self.pending.take().ok_or(Error::UnreachableState)?;
            self.session = Some(AnalysisSession::new(sequence, now));
            self.ctx.set_session_active(true);
            // Bytes that trailed the terminator belong to no line
            self.input.reset();
            self.input.discard_pending();
            self.hw.timer.enable();
        }

        if fx.analyze {
            let digit = self
                .session
                .as_ref()
                .map(AnalysisSession::current)
                .ok_or(Error::UnreachableState)?;
            let outcome = apply_digit(
                digit,
                now,
                &mut self.led,
                &mut self.blink,
                frozen,
                &mut self.hw.indicator,
            );
            self.analyses = self.analyses.wrapping_add(1);
            report::digit(&mut self.hw.serial, &outcome);
        }

        self.release(fx);
        Ok(())
    }

    /// Apply the tear-down effects
    fn release(&mut self, fx: Effects) {
        let frozen = self.ctx.button.is_frozen();

        if fx.disarm {
            self.hw.timer.disable();
            self.ctx.set_session_active(false);
            self.blink.stop();
        }

        if fx.reset {
            self.input.reset();
            self.pending = None;
            self.session = None;
        }

        if fx.led_off {
            self.led.set(false, frozen, &mut self.hw.indicator);
        }

        if fx.prompt {
            report::prompt(&mut self.hw.serial);
        }
    }

    fn recover(&mut self, err: Error) {
        report::error(&mut self.hw.serial, err);
        self.state = State::Idle;
        self.release(Effects::ABORT);
    }

    fn on_button(&mut self, report: ButtonReport, now: Millis) {
        report::button(&mut self.hw.serial, &report);

        match report.change {
            LockChange::Locked => {
                self.locked_at = self.state.is_session().then_some(self.analyses);
            }
            LockChange::Restored => self.resync(now),
            // Locked and restored between two passes
            LockChange::Unchanged if !report.frozen => self.led.mirror(&mut self.hw.indicator),
            LockChange::Unchanged => {}
        }
    }

    /// Put hardware and the running digit back in step after an unfreeze
    ///
    /// If the session is still on the digit it was on at lock time, the
    /// hardware kept that digit's last level and the blink resumes from it.
    /// Otherwise hardware takes the logical value and the current digit's
    /// rule is applied again.
    fn resync(&mut self, now: Millis) {
        let locked_at = self.locked_at.take();
        let in_session = self.state.is_session();

        if in_session && locked_at == Some(self.analyses) {
            self.led.adopt_shown();
            if self.blink.is_active() {
                self.blink.start(now);
            }
            return;
        }

        self.led.mirror(&mut self.hw.indicator);

        let digit = self.session.as_ref().map(AnalysisSession::current);
        if let (true, Some(digit)) = (in_session, digit) {
            if Parity::of(digit) == Parity::Even {
                self.led.set(true, false, &mut self.hw.indicator);
                self.blink.start(now);
            }
        }
    }

    /// Current scheduler state
    pub fn state(&self) -> State {
        self.state
    }

    /// Logical LED value
    pub fn led(&self) -> LedState {
        self.led
    }

    /// Blink phase
    pub fn blink(&self) -> &BlinkController {
        &self.blink
    }

    /// Running session, if any
    pub fn session(&self) -> Option<&AnalysisSession> {
        self.session.as_ref()
    }

    /// Line under assembly
    pub fn line(&self) -> &str {
        self.input.line().as_str()
    }

    /// Hardware collaborators
    pub fn peripherals(&self) -> &Peripherals<S, T, L> {
        &self.hw
    }

    /// Hardware collaborators, mutable
    pub fn peripherals_mut(&mut self) -> &mut Peripherals<S, T, L> {
        &mut self.hw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{channel, RxSink};
    use heapless::spsc::Queue;
    use std::string::String;

    #[derive(Default)]
    struct MockSerial {
        text: String,
    }

    impl SerialPort for MockSerial {
        fn print(&mut self, text: &str) {
            self.text.push_str(text);
        }

        fn transmit(&mut self, byte: u8) {
            self.text.push(byte as char);
        }
    }

    #[derive(Default)]
    struct MockTimer {
        enabled: bool,
    }

    impl PeriodicTimer for MockTimer {
        fn enable(&mut self) {
            self.enabled = true;
        }

        fn disable(&mut self) {
            self.enabled = false;
        }

        fn is_enabled(&self) -> bool {
            self.enabled
        }
    }

    #[derive(Default)]
    struct MockIndicator {
        on: bool,
        writes: u32,
    }

    impl IndicatorOutput for MockIndicator {
        fn set(&mut self, on: bool, _aux_a: bool, _aux_b: bool) {
            self.on = on;
            self.writes += 1;
        }
    }

    type TestController<'a> = Controller<'a, MockSerial, MockTimer, MockIndicator, 64>;

    fn controller<'a>(ctx: &'a Context, queue: &'a mut Queue<u8, 64>) -> (RxSink<'a, 64>, TestController<'a>) {
        let (sink, rx) = channel(queue, ctx);
        let hw = Peripherals {
            serial: MockSerial::default(),
            timer: MockTimer::default(),
            indicator: MockIndicator::default(),
        };
        let mut ctrl = Controller::new(ctx, rx, hw, AppConfig::default());
        ctrl.boot();
        (sink, ctrl)
    }

    fn settle(ctrl: &mut TestController<'_>) {
        for _ in 0..16 {
            if ctrl.poll() == Activity::Waiting {
                break;
            }
        }
    }

    fn send(sink: &mut RxSink<'_, 64>, ctrl: &mut TestController<'_>, bytes: &[u8]) {
        for &b in bytes {
            sink.receive(b).unwrap();
        }
        settle(ctrl);
    }

    /// Advance the clock while the tick is enabled, one pass per tick
    fn run_ms(ctx: &Context, ctrl: &mut TestController<'_>, ms: u32) -> u32 {
        let mut toggles = 0;
        for _ in 0..ms {
            if ctrl.peripherals().timer.is_enabled() {
                ctx.on_tick();
            }
            let before = ctrl.led().is_on();
            settle(ctrl);
            if ctrl.led().is_on() != before {
                toggles += 1;
            }
        }
        toggles
    }

    #[test]
    fn test_boot() {
        let ctx = Context::new();
        let mut queue = Queue::new();
        let (_sink, ctrl) = controller(&ctx, &mut queue);

        let hw = ctrl.peripherals();
        assert!(hw.serial.text.contains("*** Digit Analysis System ***"));
        assert!(hw.serial.text.ends_with("Enter number: "));
        assert!(!hw.indicator.on);
        assert!(!hw.timer.enabled);
        assert_eq!(ctrl.state(), State::Idle);
    }

    #[test]
    fn test_odd_digit_session() {
        let ctx = Context::new();
        let mut queue = Queue::new();
        let (mut sink, mut ctrl) = controller(&ctx, &mut queue);

        send(&mut sink, &mut ctrl, b"7\r");
        assert_eq!(ctrl.state(), State::AnalyzingDigit);
        assert!(ctrl.led().is_on());
        assert!(ctrl.peripherals().timer.enabled);
        assert!(ctx.is_session_active());

        assert_eq!(run_ms(&ctx, &mut ctrl, 499), 0);
        assert_eq!(ctrl.state(), State::AnalyzingDigit);

        run_ms(&ctx, &mut ctrl, 1);
        assert_eq!(ctrl.state(), State::Idle);
        assert!(ctrl.led().is_on());
        assert!(ctrl.peripherals().indicator.on);
        assert!(!ctrl.peripherals().timer.enabled);
        assert!(!ctx.is_session_active());

        let text = &ctrl.peripherals().serial.text;
        assert!(text.contains("Starting analysis...\r\n"));
        assert!(text.contains("digit 7: odd - LED toggled ON\r\n"));
        assert!(text.contains("Analysis complete.\r\n"));
        assert!(text.ends_with("Enter number: "));
    }

    #[test]
    fn test_even_digit_blinks_twice_then_keeps_blinking() {
        let ctx = Context::new();
        let mut queue = Queue::new();
        let (mut sink, mut ctrl) = controller(&ctx, &mut queue);

        send(&mut sink, &mut ctrl, b"4\r");
        assert!(ctrl.blink().is_active());
        assert!(ctrl.led().is_on());

        assert_eq!(run_ms(&ctx, &mut ctrl, 499), 2);
        run_ms(&ctx, &mut ctrl, 1);
        assert_eq!(ctrl.state(), State::ContinuousBlink);
        assert!(ctrl.peripherals().timer.enabled);
        assert!(ctrl
            .peripherals()
            .serial
            .text
            .contains("Continuous LED blinking.\r\n"));

        assert_eq!(run_ms(&ctx, &mut ctrl, 1000), 5);
        assert_eq!(ctrl.state(), State::ContinuousBlink);
    }

    #[test]
    fn test_empty_line_rejected() {
        let ctx = Context::new();
        let mut queue = Queue::new();
        let (mut sink, mut ctrl) = controller(&ctx, &mut queue);

        send(&mut sink, &mut ctrl, b"-\r");
        assert_eq!(ctrl.state(), State::Idle);
        assert!(ctrl.session().is_none());
        assert!(!ctrl.peripherals().timer.enabled);
        assert!(ctrl
            .peripherals()
            .serial
            .text
            .ends_with("No valid digits entered.\r\nEnter number: "));
    }

    #[test]
    fn test_new_input_interrupts_session() {
        let ctx = Context::new();
        let mut queue = Queue::new();
        let (mut sink, mut ctrl) = controller(&ctx, &mut queue);

        send(&mut sink, &mut ctrl, b"24-\r");
        run_ms(&ctx, &mut ctrl, 700);
        assert_eq!(ctrl.state(), State::AnalyzingDigit);

        sink.receive(b'9').unwrap();
        assert!(ctx.is_interrupted());
        ctrl.poll();

        assert!(!ctrl.peripherals().timer.enabled);
        assert!(!ctx.is_session_active());
        assert!(!ctrl.led().is_on());
        assert!(!ctrl.peripherals().indicator.on);
        assert!(ctrl.session().is_none());
        assert!(ctrl
            .peripherals()
            .serial
            .text
            .contains("\r\nAnalysis interrupted by new input.\r\nEnter number: "));

        // The interrupting byte starts the next line
        settle(&mut ctrl);
        assert_eq!(ctrl.state(), State::Receiving);
        assert_eq!(ctrl.line(), "9");
    }

    #[test]
    fn test_freeze_holds_hardware() {
        let ctx = Context::new();
        let mut queue = Queue::new();
        let (mut sink, mut ctrl) = controller(&ctx, &mut queue);

        send(&mut sink, &mut ctrl, b"7\r");
        assert!(ctrl.peripherals().indicator.on);

        ctx.on_button_edge();
        settle(&mut ctrl);
        assert!(ctrl
            .peripherals()
            .serial
            .text
            .contains("LED functionality LOCKED. Press count: 1"));

        run_ms(&ctx, &mut ctrl, 500);
        send(&mut sink, &mut ctrl, b"3\r");
        assert!(!ctrl.led().is_on());
        assert!(ctrl.peripherals().indicator.on);

        ctx.on_button_edge();
        settle(&mut ctrl);
        assert!(ctrl
            .peripherals()
            .serial
            .text
            .contains("LED functionality RESTORED. Press count: 2"));
        assert!(!ctrl.peripherals().indicator.on);
    }

    #[test]
    fn test_unfreeze_restarts_blink_phase() {
        let ctx = Context::new();
        let mut queue = Queue::new();
        let (mut sink, mut ctrl) = controller(&ctx, &mut queue);

        send(&mut sink, &mut ctrl, b"8\r");
        ctx.on_button_edge();
        run_ms(&ctx, &mut ctrl, 100);
        ctx.on_button_edge();
        settle(&mut ctrl);

        // Phase restarted at 100 ms: next toggle at 300, not 200
        assert_eq!(run_ms(&ctx, &mut ctrl, 150), 0);
        assert_eq!(run_ms(&ctx, &mut ctrl, 50), 1);
    }

    #[test]
    fn test_unfreeze_in_on_phase_keeps_level() {
        let ctx = Context::new();
        let mut queue = Queue::new();
        let (mut sink, mut ctrl) = controller(&ctx, &mut queue);

        send(&mut sink, &mut ctrl, b"4\r");
        let before = ctrl.peripherals().indicator.on;
        assert!(before);

        ctx.on_button_edge();
        settle(&mut ctrl);
        run_ms(&ctx, &mut ctrl, 250);
        ctx.on_button_edge();
        settle(&mut ctrl);

        assert_eq!(ctrl.peripherals().indicator.on, before);
        assert_eq!(ctrl.led().is_on(), before);
        assert!(ctrl.blink().is_active());
    }

    #[test]
    fn test_unfreeze_in_off_phase_keeps_level() {
        let ctx = Context::new();
        let mut queue = Queue::new();
        let (mut sink, mut ctrl) = controller(&ctx, &mut queue);

        send(&mut sink, &mut ctrl, b"4\r");
        run_ms(&ctx, &mut ctrl, 250);
        let before = ctrl.peripherals().indicator.on;
        assert!(!before);

        ctx.on_button_edge();
        settle(&mut ctrl);
        run_ms(&ctx, &mut ctrl, 200);
        ctx.on_button_edge();
        settle(&mut ctrl);

        assert_eq!(ctrl.peripherals().indicator.on, before);
        assert_eq!(ctrl.led().is_on(), before);

        // Blink resumes one full period after the unfreeze
        assert_eq!(run_ms(&ctx, &mut ctrl, 199), 0);
        assert_eq!(run_ms(&ctx, &mut ctrl, 1), 1);
    }

    #[test]
    fn test_unfreeze_on_new_even_digit_reapplies_rule() {
        let ctx = Context::new();
        let mut queue = Queue::new();
        let (mut sink, mut ctrl) = controller(&ctx, &mut queue);

        send(&mut sink, &mut ctrl, b"34\r");
        run_ms(&ctx, &mut ctrl, 200);
        ctx.on_button_edge();
        settle(&mut ctrl);

        // Digit 4 at 500 ms, its first blink toggle at 700 ms
        run_ms(&ctx, &mut ctrl, 650);
        assert!(!ctrl.led().is_on());
        assert!(ctrl.peripherals().indicator.on);

        ctx.on_button_edge();
        settle(&mut ctrl);
        assert!(ctrl.led().is_on());
        assert!(ctrl.peripherals().indicator.on);

        // Phase restarted at 850 ms; the sequence ends at 1000 ms
        assert_eq!(run_ms(&ctx, &mut ctrl, 199), 0);
        assert_eq!(ctrl.state(), State::ContinuousBlink);
        assert_eq!(run_ms(&ctx, &mut ctrl, 1), 1);
    }

    #[test]
    fn test_coalesced_presses_leave_output_alone() {
        let ctx = Context::new();
        let mut queue = Queue::new();
        let (mut sink, mut ctrl) = controller(&ctx, &mut queue);

        send(&mut sink, &mut ctrl, b"4\r");
        run_ms(&ctx, &mut ctrl, 250);
        assert!(!ctrl.peripherals().indicator.on);

        ctx.on_button_edge();
        ctx.on_button_edge();
        settle(&mut ctrl);

        assert!(!ctrl.peripherals().indicator.on);
        let text = &ctrl.peripherals().serial.text;
        assert!(text.contains("LOCKED. Press count: 1\r\n"));
        assert!(text.ends_with("RESTORED. Press count: 2\r\n"));
    }

    #[test]
    fn test_missing_sequence_recovers_to_idle() {
        let ctx = Context::new();
        let mut queue = Queue::new();
        let (_sink, mut ctrl) = controller(&ctx, &mut queue);

        ctrl.state = State::Starting;
        ctrl.hw.timer.enabled = true;
        ctrl.hw.serial.text.clear();
        settle(&mut ctrl);

        assert_eq!(ctrl.state(), State::Idle);
        assert!(ctrl.session().is_none());
        assert!(!ctrl.peripherals().timer.enabled);
        assert!(!ctx.is_session_active());
        assert!(ctrl
            .peripherals()
            .serial
            .text
            .ends_with("Unexpected state, resetting.\r\nEnter number: "));
    }

    #[test]
    fn test_missing_session_recovers_to_idle() {
        let ctx = Context::new();
        let mut queue = Queue::new();
        let (mut sink, mut ctrl) = controller(&ctx, &mut queue);

        send(&mut sink, &mut ctrl, b"5\r");
        ctrl.session = None;
        ctrl.poll();

        assert_eq!(ctrl.state(), State::Idle);
        assert!(!ctrl.peripherals().timer.enabled);
        assert!(!ctrl.led().is_on());
        assert!(ctrl
            .peripherals()
            .serial
            .text
            .ends_with("Unexpected state, resetting.\r\nEnter number: "));

        // Input works again afterwards
        send(&mut sink, &mut ctrl, b"2\r");
        assert_eq!(ctrl.state(), State::AnalyzingDigit);
    }
}
