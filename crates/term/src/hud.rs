//! Hud: the terminal-side UI sink.
//!
//! Keeps the presentation state the spin controller pushes (balance, wins,
//! win message, spin affordance) and animates it with its own tween scheduler:
//!
//! - win message: fades and grows in, holds, fades out, hides
//! - spin affordance: shrinks while pressed, reverts after a short delay
//!
//! Deferred steps run on timer queues with their own generation tokens, so a
//! newer message or press always supersedes a pending older one.
//!
//! [`UiSink`] calls carry no timestamp; animations they start are anchored at
//! the time of the last [`Hud::tick`].

use crate::core::{Easing, TimerQueue, TweenScheduler, TweenSpec, Tweenable, UiSink};
use crate::types::{PRESS_REVERT_MS, PRESS_SCALE, WIN_MESSAGE_FADE_MS, WIN_MESSAGE_HOLD_MS};

/// Scale a win message starts growing from.
const MESSAGE_START_SCALE: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudProperty {
    MessageOpacity,
    MessageScale,
    ButtonScale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HudEvent {
    MessageShown,
    MessageHidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HudTask {
    FadeOutMessage,
    ReleaseButton,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct HudProps {
    message_opacity: f64,
    message_scale: f64,
    button_scale: f64,
}

impl Tweenable<HudProperty> for HudProps {
    fn value(&self, property: HudProperty) -> f64 {
        match property {
            HudProperty::MessageOpacity => self.message_opacity,
            HudProperty::MessageScale => self.message_scale,
            HudProperty::ButtonScale => self.button_scale,
        }
    }

    fn set_value(&mut self, property: HudProperty, value: f64) {
        match property {
            HudProperty::MessageOpacity => self.message_opacity = value,
            HudProperty::MessageScale => self.message_scale = value,
            HudProperty::ButtonScale => self.button_scale = value,
        }
    }
}

pub struct Hud {
    balance: u32,
    win_count: u32,
    last_win: u32,
    message: String,
    message_visible: bool,
    enabled: bool,
    busy: bool,
    props: HudProps,
    tweens: TweenScheduler<HudProperty, HudEvent>,
    message_timers: TimerQueue<HudTask>,
    press_timers: TimerQueue<HudTask>,
    message_generation: u64,
    press_generation: u64,
    now_ms: u64,
}

impl Default for Hud {
    fn default() -> Self {
        Self::new()
    }
}

impl Hud {
    pub fn new() -> Self {
        Self {
            balance: 0,
            win_count: 0,
            last_win: 0,
            message: String::with_capacity(64),
            message_visible: false,
            enabled: false,
            busy: false,
            props: HudProps {
                message_opacity: 0.0,
                message_scale: 1.0,
                button_scale: 1.0,
            },
            tweens: TweenScheduler::with_capacity(4),
            message_timers: TimerQueue::with_capacity(2),
            press_timers: TimerQueue::with_capacity(2),
            message_generation: 0,
            press_generation: 0,
            now_ms: 0,
        }
    }

    /// Press feedback on the spin affordance. Ignored while it is disabled.
    pub fn press(&mut self, now_ms: u64) -> bool {
        if !self.enabled {
            return false;
        }
        self.now_ms = self.now_ms.max(now_ms);
        self.press_generation += 1;
        self.tweens.cancel_property(HudProperty::ButtonScale);
        self.props.button_scale = PRESS_SCALE;
        self.press_timers.schedule(
            self.now_ms,
            PRESS_REVERT_MS,
            self.press_generation,
            HudTask::ReleaseButton,
        );
        true
    }

    /// Per-frame update. Call before the controller's tick.
    pub fn tick(&mut self, now_ms: u64) {
        self.now_ms = now_ms;

        let mut shown = false;
        let mut hidden = false;
        self.tweens.advance(now_ms, &mut self.props, |event| match event {
            HudEvent::MessageShown => shown = true,
            HudEvent::MessageHidden => hidden = true,
        });
        if shown {
            self.message_timers.schedule(
                now_ms,
                WIN_MESSAGE_HOLD_MS,
                self.message_generation,
                HudTask::FadeOutMessage,
            );
        }
        if hidden {
            self.message_visible = false;
        }

        let mut fade_out = false;
        self.message_timers
            .drain_due(now_ms, self.message_generation, |task| {
                fade_out |= task == HudTask::FadeOutMessage
            });
        if fade_out {
            self.tweens.schedule(
                &self.props,
                now_ms,
                TweenSpec::new(
                    HudProperty::MessageOpacity,
                    0.0,
                    WIN_MESSAGE_FADE_MS,
                    Easing::Linear,
                )
                .on_complete(HudEvent::MessageHidden),
            );
        }

        let mut release = false;
        self.press_timers
            .drain_due(now_ms, self.press_generation, |task| {
                release |= task == HudTask::ReleaseButton
            });
        if release {
            self.props.button_scale = 1.0;
        }
    }

    pub fn balance(&self) -> u32 {
        self.balance
    }

    /// Number of winning spins this session.
    pub fn win_count(&self) -> u32 {
        self.win_count
    }

    pub fn last_win(&self) -> u32 {
        self.last_win
    }

    /// The win message, while it is on screen.
    pub fn message(&self) -> Option<&str> {
        self.message_visible.then_some(self.message.as_str())
    }

    pub fn message_opacity(&self) -> f64 {
        self.props.message_opacity
    }

    pub fn message_scale(&self) -> f64 {
        self.props.message_scale
    }

    pub fn button_scale(&self) -> f64 {
        self.props.button_scale
    }

    pub fn is_pressed(&self) -> bool {
        self.props.button_scale < 1.0
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn busy(&self) -> bool {
        self.busy
    }

    pub fn button_label(&self) -> &'static str {
        if self.busy {
            "STOP"
        } else {
            "SPIN"
        }
    }

    /// Whether any HUD animation is in flight.
    pub fn is_animating(&self) -> bool {
        !self.tweens.is_empty() || !self.message_timers.is_empty() || !self.press_timers.is_empty()
    }
}

impl UiSink for Hud {
    fn update_balance(&mut self, balance: u32) {
        self.balance = balance;
    }

    fn update_win_display(&mut self, amount: u32) {
        self.last_win = amount;
        if amount > 0 {
            self.win_count += 1;
            log::debug!("win #{}: {}", self.win_count, amount);
        }
    }

    fn show_win_message(&mut self, text: &str) {
        self.message.clear();
        self.message.push_str(text);
        self.message_visible = true;
        self.message_generation += 1;

        self.tweens.cancel_property(HudProperty::MessageOpacity);
        self.tweens.cancel_property(HudProperty::MessageScale);
        self.props.message_opacity = 0.0;
        self.props.message_scale = MESSAGE_START_SCALE;

        let now = self.now_ms;
        self.tweens.schedule(
            &self.props,
            now,
            TweenSpec::new(HudProperty::MessageScale, 1.0, WIN_MESSAGE_FADE_MS, Easing::Linear),
        );
        self.tweens.schedule(
            &self.props,
            now,
            TweenSpec::new(HudProperty::MessageOpacity, 1.0, WIN_MESSAGE_FADE_MS, Easing::Linear)
                .on_complete(HudEvent::MessageShown),
        );
    }

    fn set_spin_affordance_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn set_spin_affordance_busy(&mut self, busy: bool) {
        self.busy = busy;
    }
}
