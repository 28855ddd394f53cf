//! Spin controller - the spin lifecycle state machine
//!
//! ```text
//! Idle --spin (balance >= bet)--> Spinning --stop--> Stopping
//!                                    |                  |
//!                                    +--last reel done--+--> Settling
//! Settling --settle delay--> Evaluating --pay, update UI--> Idle
//! ```
//!
//! The controller owns the reels, their tween scheduler and the deferred task
//! queue. Call [`SpinController::tick`] once per frame with the current time;
//! player requests go through [`SpinController::handle_action`].
//!
//! Spin durations are made non-decreasing across reels, so the tween of the
//! last reel is always the last to finish and its completion alone drives the
//! transition to `Settling`.

use arrayvec::ArrayVec;

use crate::config::SlotConfig;
use crate::error::SlotError;
use crate::outcome::{evaluate, Outcome};
use crate::ports::{SymbolTextures, UiSink};
use crate::reel::{Reel, ReelProperty};
use crate::rng::SimpleRng;
use crate::snapshot::{MachineSnapshot, ReelSnapshot};
use crate::timers::TimerQueue;
use crate::tween::{Easing, TweenScheduler, TweenSpec};
use crate::types::{SpinAction, SpinPhase, SymbolType, FALLBACK_SYMBOL, REEL_COUNT};

/// Notifications emitted by reel tweens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinEvent {
    /// The last reel's tween completed (naturally or after a stop).
    ReelsStopped,
}

/// Deferred controller work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinTask {
    SettleElapsed,
}

/// Drives the reels through one spin at a time and keeps the balance.
pub struct SpinController<X: SymbolTextures> {
    config: SlotConfig,
    textures: X,
    reels: ArrayVec<Reel<X::Handle>, REEL_COUNT>,
    tweens: TweenScheduler<ReelProperty, SpinEvent>,
    timers: TimerQueue<SpinTask>,
    rng: SimpleRng,
    phase: SpinPhase,
    balance: u32,
    running: bool,
    start_positions: [f64; REEL_COUNT],
    /// Also the generation token of deferred tasks.
    spin_count: u64,
    last_outcome: Option<Outcome>,
    last_symbols: Option<[SymbolType; REEL_COUNT]>,
}

impl<X: SymbolTextures> SpinController<X> {
    /// Build the machine. Fails on a configuration defect.
    pub fn new(config: SlotConfig, textures: X) -> Result<Self, SlotError> {
        config.validate()?;

        let mut rng = SimpleRng::new(config.seed);
        let mut reels = ArrayVec::new();
        for index in 0..REEL_COUNT {
            reels.push(Reel::new(index, &config.symbols, &mut rng, &textures)?);
        }

        log::info!(
            "machine ready: balance={} bet={} seed={} table={} symbols",
            config.initial_balance,
            config.bet,
            config.seed,
            config.symbols.len()
        );

        Ok(Self {
            balance: config.initial_balance,
            config,
            textures,
            reels,
            tweens: TweenScheduler::with_capacity(REEL_COUNT),
            timers: TimerQueue::with_capacity(2),
            rng,
            phase: SpinPhase::Idle,
            running: false,
            start_positions: [0.0; REEL_COUNT],
            spin_count: 0,
            last_outcome: None,
            last_symbols: None,
        })
    }

    /// Push the full presentation state to `ui`.
    pub fn sync_ui(&self, ui: &mut impl UiSink) {
        ui.update_balance(self.balance);
        ui.set_spin_affordance_busy(self.is_busy());
        ui.set_spin_affordance_enabled(self.affordance_enabled());
    }

    /// Apply a player request. Returns whether it changed anything.
    pub fn handle_action(&mut self, action: SpinAction, now_ms: u64, ui: &mut impl UiSink) -> bool {
        match action {
            SpinAction::Toggle => self.request_toggle(now_ms, ui),
            SpinAction::Spin => self.request_spin(now_ms, ui),
            SpinAction::Stop => self.request_stop(now_ms, ui),
        }
    }

    /// Spin when idle, stop when spinning.
    pub fn request_toggle(&mut self, now_ms: u64, ui: &mut impl UiSink) -> bool {
        match self.phase {
            SpinPhase::Spinning => self.request_stop(now_ms, ui),
            _ => self.request_spin(now_ms, ui),
        }
    }

    /// Deduct the bet and start every reel. Ignored while a spin is running
    /// or when the balance cannot cover the bet.
    pub fn request_spin(&mut self, now_ms: u64, ui: &mut impl UiSink) -> bool {
        if self.running || self.phase != SpinPhase::Idle {
            log::debug!("spin ignored: {} in progress", self.phase.as_str());
            return false;
        }
        if self.balance < self.config.bet {
            log::debug!(
                "spin ignored: balance {} below bet {}",
                self.balance,
                self.config.bet
            );
            return false;
        }

        self.balance -= self.config.bet;
        self.running = true;
        self.phase = SpinPhase::Spinning;
        self.spin_count += 1;
        self.last_outcome = None;
        self.last_symbols = None;

        ui.update_balance(self.balance);
        ui.set_spin_affordance_busy(true);
        ui.set_spin_affordance_enabled(self.affordance_enabled());

        let timing = self.config.timing;
        let last = self.reels.len() - 1;
        let mut min_duration = 0;
        for i in 0..self.reels.len() {
            let start = self.reels[i].position();
            self.start_positions[i] = start;

            let extra = self.rng.next_inclusive(timing.max_extra_distance);
            let target = start + timing.spin_distance(i, extra);
            let duration = timing.spin_duration_ms(i, extra).max(min_duration);
            min_duration = duration;

            let mut spec = TweenSpec::new(
                ReelProperty::Position(i),
                target,
                duration,
                Easing::BackOut(timing.start_overshoot),
            );
            if i == last {
                spec = spec.on_complete(SpinEvent::ReelsStopped);
            }
            self.tweens.schedule(&self.reels[..], now_ms, spec);

            log::debug!(
                "spin #{} reel {}: {:.2} -> {:.2} over {}ms",
                self.spin_count,
                i,
                start,
                target,
                duration
            );
        }

        log::info!(
            "spin #{} started: bet={} balance={}",
            self.spin_count,
            self.config.bet,
            self.balance
        );
        true
    }

    /// Cut the spin short: every reel runs a short tween to a whole slot at
    /// least one slot past where it started. Ignored unless spinning.
    pub fn request_stop(&mut self, now_ms: u64, ui: &mut impl UiSink) -> bool {
        if self.phase != SpinPhase::Spinning {
            log::debug!("stop ignored in {}", self.phase.as_str());
            return false;
        }

        self.tweens.clear();
        self.phase = SpinPhase::Stopping;
        ui.set_spin_affordance_enabled(self.affordance_enabled());

        let timing = self.config.timing;
        let last = self.reels.len() - 1;
        let mut min_duration = 0;
        for i in 0..self.reels.len() {
            let current = self.reels[i].position();
            let start = self.start_positions[i];
            let target = if current - start < timing.min_stop_distance {
                (start + timing.min_stop_distance).ceil()
            } else {
                current.ceil()
            };
            let duration = timing.stop_duration_ms(i).max(min_duration);
            min_duration = duration;

            let mut spec = TweenSpec::new(
                ReelProperty::Position(i),
                target,
                duration,
                Easing::BackOut(timing.stop_overshoot),
            );
            if i == last {
                spec = spec.on_complete(SpinEvent::ReelsStopped);
            }
            self.tweens.schedule(&self.reels[..], now_ms, spec);
        }

        log::info!("spin #{} stopped early", self.spin_count);
        true
    }

    /// Per-frame update.
    pub fn tick(&mut self, now_ms: u64, ui: &mut impl UiSink) {
        let mut reels_stopped = false;
        self.tweens
            .advance(now_ms, &mut self.reels[..], |event| match event {
                SpinEvent::ReelsStopped => reels_stopped = true,
            });

        for reel in self.reels.iter_mut() {
            reel.tick_recycle(&self.config.symbols, &mut self.rng, &self.textures);
        }

        if reels_stopped {
            self.on_reels_stopped(now_ms, ui);
        }

        let mut settled = false;
        self.timers
            .drain_due(now_ms, self.spin_count, |task| match task {
                SpinTask::SettleElapsed => settled = true,
            });
        if settled {
            self.evaluate(ui);
        }
    }

    fn on_reels_stopped(&mut self, now_ms: u64, ui: &mut impl UiSink) {
        if !self.phase.reels_moving() {
            log::warn!("reels stopped in {}", self.phase.as_str());
            return;
        }
        self.phase = SpinPhase::Settling;
        ui.set_spin_affordance_busy(false);
        ui.set_spin_affordance_enabled(self.affordance_enabled());
        self.timers.schedule(
            now_ms,
            self.config.timing.settle_delay_ms,
            self.spin_count,
            SpinTask::SettleElapsed,
        );
    }

    fn evaluate(&mut self, ui: &mut impl UiSink) {
        self.phase = SpinPhase::Evaluating;

        let mut symbols = [FALLBACK_SYMBOL; REEL_COUNT];
        let mut unresolved = None;
        for (symbol, reel) in symbols.iter_mut().zip(self.reels.iter()) {
            match reel.centered_symbol() {
                Ok(s) => *symbol = s,
                Err(err) => {
                    unresolved = Some(err);
                    break;
                }
            }
        }
        if let Some(err) = unresolved {
            log::error!(
                "spin #{}: {err}; skipping evaluation, balance stays {}",
                self.spin_count,
                self.balance
            );
            self.finish(ui);
            return;
        }

        let outcome = evaluate(&symbols, self.config.bet);
        log::info!(
            "spin #{} result: {} {} {} payout={}",
            self.spin_count,
            symbols[0].as_str(),
            symbols[1].as_str(),
            symbols[2].as_str(),
            outcome.payout
        );

        if outcome.is_win() {
            self.balance = self.balance.saturating_add(outcome.payout);
            ui.update_balance(self.balance);
            ui.update_win_display(outcome.payout);
            if let Some(message) = outcome.message() {
                ui.show_win_message(&message);
            }
        }

        self.last_outcome = Some(outcome);
        self.last_symbols = Some(symbols);
        self.finish(ui);
    }

    fn finish(&mut self, ui: &mut impl UiSink) {
        self.running = false;
        self.phase = SpinPhase::Idle;
        ui.set_spin_affordance_enabled(self.affordance_enabled());
        if self.balance < self.config.bet {
            log::info!("balance {} cannot cover the next bet", self.balance);
        }
    }

    /// Whether the spin/stop affordance currently does anything.
    pub fn affordance_enabled(&self) -> bool {
        match self.phase {
            SpinPhase::Idle => !self.running && self.balance >= self.config.bet,
            SpinPhase::Spinning => true,
            _ => false,
        }
    }

    /// Whether the reels are under a spin or stop tween.
    pub fn is_busy(&self) -> bool {
        self.phase.reels_moving()
    }

    pub fn phase(&self) -> SpinPhase {
        self.phase
    }

    pub fn balance(&self) -> u32 {
        self.balance
    }

    pub fn bet(&self) -> u32 {
        self.config.bet
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn spin_count(&self) -> u64 {
        self.spin_count
    }

    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    /// Symbols read by the last completed evaluation.
    pub fn last_symbols(&self) -> Option<[SymbolType; REEL_COUNT]> {
        self.last_symbols
    }

    pub fn reels(&self) -> &[Reel<X::Handle>] {
        &self.reels
    }

    /// Position each reel had when the current spin started.
    pub fn start_positions(&self) -> &[f64; REEL_COUNT] {
        &self.start_positions
    }

    pub fn config(&self) -> &SlotConfig {
        &self.config
    }

    pub fn textures(&self) -> &X {
        &self.textures
    }

    pub fn tweens(&self) -> &TweenScheduler<ReelProperty, SpinEvent> {
        &self.tweens
    }

    pub fn snapshot_into(&self, out: &mut MachineSnapshot) {
        out.phase = self.phase;
        out.balance = self.balance;
        out.bet = self.config.bet;
        out.running = self.running;
        out.spin_count = self.spin_count;
        for (snap, reel) in out.reels.iter_mut().zip(self.reels.iter()) {
            *snap = ReelSnapshot {
                position: reel.position(),
                blur: reel.blur(),
                centered: reel.centered_slot().map(|slot| reel.symbols()[slot]),
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{NoTextures, UiEvent};
    use crate::types::{SymbolType::*, TICK_MS};

    fn controller(seed: u32) -> SpinController<NoTextures> {
        SpinController::new(SlotConfig::with_seed(seed), NoTextures).unwrap()
    }

    /// Tick until `done` holds; returns the time reached.
    fn run_until(
        c: &mut SpinController<NoTextures>,
        ui: &mut Vec<UiEvent>,
        mut now: u64,
        done: impl Fn(&SpinController<NoTextures>) -> bool,
    ) -> u64 {
        for _ in 0..10_000 {
            if done(c) {
                return now;
            }
            now += TICK_MS as u64;
            c.tick(now, ui);
        }
        panic!("controller stuck in {:?}", c.phase());
    }

    #[test]
    fn test_new_rejects_bad_config() {
        let config = SlotConfig {
            bet: 0,
            ..SlotConfig::default()
        };
        assert_eq!(
            SpinController::new(config, NoTextures).err(),
            Some(SlotError::ZeroBet)
        );

        let mut config = SlotConfig::default();
        config.symbols.clear();
        assert_eq!(
            SpinController::new(config, NoTextures).err(),
            Some(SlotError::EmptySymbolTable)
        );
    }

    #[test]
    fn test_spin_deducts_bet_before_reels_move() {
        let mut c = controller(1);
        let mut ui = Vec::new();

        assert!(c.request_spin(0, &mut ui));
        assert_eq!(c.balance(), 99);
        assert!(c.is_running());
        assert_eq!(c.phase(), SpinPhase::Spinning);
        assert_eq!(c.spin_count(), 1);
        assert_eq!(c.tweens().len(), REEL_COUNT);
        assert_eq!(
            ui,
            vec![
                UiEvent::Balance(99),
                UiEvent::AffordanceBusy(true),
                UiEvent::AffordanceEnabled(true),
            ]
        );
        assert!(c.reels().iter().all(|r| r.position() == 0.0));
    }

    #[test]
    fn test_spin_targets_and_durations() {
        let mut c = controller(3);
        c.request_spin(0, &mut ());

        let timing = c.config().timing;
        let mut previous = 0;
        for (i, tween) in c.tweens().tweens().iter().enumerate() {
            let distance = tween.target() - tween.begin();
            let base = timing.spin_distance(i, 0);
            assert!(distance >= base && distance <= base + timing.max_extra_distance as f64);
            assert_eq!(distance.fract(), 0.0);

            let end = (0..).map(|t| t * 10).find(|&t| tween.progress(t) >= 1.0).unwrap();
            assert!(end >= previous, "reel {i} would finish before reel {}", i - 1);
            previous = end;
        }
    }

    #[test]
    fn test_spin_durations_keep_stagger_unless_stretched() {
        let mut stretched = 0;
        for seed in 1..200 {
            let mut c = controller(seed);
            c.request_spin(0, &mut ());

            let timing = c.config().timing;
            let mut formula = [0u32; REEL_COUNT];
            let mut actual = [0u32; REEL_COUNT];
            for (i, tween) in c.tweens().tweens().iter().enumerate() {
                let extra = (tween.target() - tween.begin() - timing.spin_distance(i, 0)) as u32;
                formula[i] = timing.spin_duration_ms(i, extra);
                actual[i] = tween.duration_ms();
            }

            if formula.windows(2).all(|w| w[0] <= w[1]) {
                assert_eq!(actual, formula, "seed {seed}");
            } else {
                stretched += 1;
                let mut longest = 0;
                for i in 0..REEL_COUNT {
                    longest = longest.max(formula[i]);
                    assert_eq!(actual[i], longest, "seed {seed} reel {i}");
                }
            }
        }
        assert!(stretched > 0);
    }

    #[test]
    fn test_spin_ignored_while_running() {
        let mut c = controller(1);
        c.request_spin(0, &mut ());
        let mut ui = Vec::new();

        assert!(!c.request_spin(16, &mut ui));
        assert_eq!(c.balance(), 99);
        assert_eq!(c.spin_count(), 1);
        assert!(ui.is_empty());
    }

    #[test]
    fn test_spin_ignored_when_broke() {
        let config = SlotConfig {
            initial_balance: 0,
            ..SlotConfig::default()
        };
        let mut c = SpinController::new(config, NoTextures).unwrap();
        let mut ui = Vec::new();

        assert!(!c.affordance_enabled());
        assert!(!c.handle_action(SpinAction::Toggle, 0, &mut ui));
        assert_eq!(c.phase(), SpinPhase::Idle);
        assert_eq!(c.balance(), 0);
        assert!(c.tweens().is_empty());
        assert!(ui.is_empty());
    }

    #[test]
    fn test_stop_ignored_unless_spinning() {
        let mut c = controller(1);
        assert!(!c.request_stop(0, &mut ()));

        c.request_spin(0, &mut ());
        assert!(c.request_stop(100, &mut ()));
        assert_eq!(c.phase(), SpinPhase::Stopping);
        assert!(!c.request_stop(116, &mut ()));
        assert!(!c.handle_action(SpinAction::Toggle, 132, &mut ()));
        assert_eq!(c.phase(), SpinPhase::Stopping);
    }

    #[test]
    fn test_natural_spin_lifecycle() {
        let mut c = controller(7);
        let mut ui = Vec::new();
        c.request_spin(0, &mut ui);

        let now = run_until(&mut c, &mut ui, 0, |c| c.phase() == SpinPhase::Settling);
        assert!(c.is_running());
        assert!(c.tweens().is_empty());
        for (reel, start) in c.reels().iter().zip(c.start_positions()) {
            assert_eq!(reel.position().fract(), 0.0);
            assert!(reel.position() - start >= 10.0);
        }
        assert!(ui.contains(&UiEvent::AffordanceBusy(false)));

        run_until(&mut c, &mut ui, now, |c| c.phase() == SpinPhase::Idle);
        assert!(!c.is_running());

        let symbols = c.last_symbols().unwrap();
        let outcome = c.last_outcome().unwrap();
        assert_eq!(outcome, evaluate(&symbols, 1));
        assert_eq!(c.balance(), 99 + outcome.payout);
        for (reel, symbol) in c.reels().iter().zip(symbols) {
            assert_eq!(reel.centered_symbol().unwrap(), symbol);
        }
        assert_eq!(ui.last(), Some(&UiEvent::AffordanceEnabled(true)));
    }

    #[test]
    fn test_settle_delay_before_evaluation() {
        let mut c = controller(7);
        c.request_spin(0, &mut ());
        let settled_at = run_until(&mut c, &mut Vec::new(), 0, |c| {
            c.phase() == SpinPhase::Settling
        });

        c.tick(settled_at + 99, &mut ());
        assert_eq!(c.phase(), SpinPhase::Settling);
        c.tick(settled_at + 100, &mut ());
        assert_eq!(c.phase(), SpinPhase::Idle);
    }

    #[test]
    fn test_manual_stop_early_travels_one_slot() {
        let mut c = controller(11);
        c.request_spin(0, &mut ());
        c.tick(16, &mut ());
        assert!(c.reels()[0].position() - c.start_positions()[0] < 1.0);

        c.request_stop(16, &mut ());
        for (i, tween) in c.tweens().tweens().iter().enumerate() {
            let start = c.start_positions()[i];
            assert_eq!(tween.target(), (start + 1.0).ceil());
        }

        run_until(&mut c, &mut Vec::new(), 16, |c| c.phase() == SpinPhase::Idle);
        for (reel, start) in c.reels().iter().zip(c.start_positions()) {
            assert!(reel.position() - start >= 1.0);
            assert_eq!(reel.position().fract(), 0.0);
        }
    }

    #[test]
    fn test_manual_stop_mid_spin_rounds_up() {
        let mut c = controller(11);
        c.request_spin(0, &mut ());
        let mut now = 0;
        while now < 1200 {
            now += 16;
            c.tick(now, &mut ());
        }
        let currents: Vec<f64> = c.reels().iter().map(|r| r.position()).collect();
        c.request_stop(now, &mut ());

        for (tween, current) in c.tweens().tweens().iter().zip(currents) {
            assert!(current > 1.0);
            assert_eq!(tween.target(), current.ceil());
        }
        assert!(matches!(
            c.tweens().tweens().last().map(|t| t.property()),
            Some(ReelProperty::Position(2))
        ));
    }

    #[test]
    fn test_forced_pair_pays_two() {
        let mut c = controller(5);
        let mut ui = Vec::new();
        c.request_spin(0, &mut ui);
        let now = run_until(&mut c, &mut ui, 0, |c| c.phase() == SpinPhase::Settling);

        for (reel, symbol) in c.reels.iter_mut().zip([Sym1, Sym1, Sym3]) {
            let slot = reel.centered_slot().unwrap();
            reel.set_symbol(slot, symbol, &NoTextures);
        }
        ui.clear();
        run_until(&mut c, &mut ui, now, |c| c.phase() == SpinPhase::Idle);

        assert_eq!(c.balance(), 101);
        assert_eq!(c.last_symbols(), Some([Sym1, Sym1, Sym3]));
        assert_eq!(
            ui,
            vec![
                UiEvent::Balance(101),
                UiEvent::WinDisplay(2),
                UiEvent::WinMessage("Nice Win!\n2 Silver Star!".to_string()),
                UiEvent::AffordanceEnabled(true),
            ]
        );
    }

    #[test]
    fn test_jackpot_only_table() {
        let config = SlotConfig {
            symbols: vec![Sym6],
            ..SlotConfig::with_seed(2)
        };
        let mut c = SpinController::new(config, NoTextures).unwrap();
        c.request_spin(0, &mut ());
        run_until(&mut c, &mut Vec::new(), 0, |c| c.phase() == SpinPhase::Idle);

        assert_eq!(c.balance(), 102);
        assert_eq!(c.last_outcome().unwrap().count, 3);
    }

    #[test]
    fn test_unresolved_symbol_skips_evaluation() {
        let mut c = controller(5);
        let mut ui = Vec::new();
        c.request_spin(0, &mut ui);
        let now = run_until(&mut c, &mut ui, 0, |c| c.phase() == SpinPhase::Settling);

        c.reels[1].advance_position(f64::NAN);
        ui.clear();
        run_until(&mut c, &mut ui, now, |c| c.phase() == SpinPhase::Idle);

        assert_eq!(c.balance(), 99);
        assert!(!c.is_running());
        assert_eq!(c.last_outcome(), None);
        assert_eq!(ui, vec![UiEvent::AffordanceEnabled(true)]);
    }

    #[test]
    fn test_affordance_follows_phase() {
        let config = SlotConfig {
            initial_balance: 1,
            ..SlotConfig::with_seed(9)
        };
        let mut c = SpinController::new(config, NoTextures).unwrap();
        assert!(c.affordance_enabled());

        c.request_spin(0, &mut ());
        assert!(c.affordance_enabled());
        assert!(c.is_busy());

        c.request_stop(10, &mut ());
        assert!(!c.affordance_enabled());
        assert!(c.is_busy());

        run_until(&mut c, &mut Vec::new(), 10, |c| c.phase() == SpinPhase::Idle);
        assert!(!c.is_busy());
        assert_eq!(c.affordance_enabled(), c.balance() >= 1);
    }

    #[test]
    fn test_balance_conservation_over_many_spins() {
        let mut c = controller(2024);
        let mut now = 0;
        let mut paid = 0;
        for spin in 0..20u32 {
            assert!(c.request_spin(now, &mut ()));
            if spin % 3 == 0 {
                now += 48;
                c.tick(now, &mut ());
                c.request_stop(now, &mut ());
            }
            now = run_until(&mut c, &mut Vec::new(), now, |c| c.phase() == SpinPhase::Idle);
            paid += c.last_outcome().unwrap().payout;
        }
        assert_eq!(c.balance(), 100 - 20 + paid);
        assert_eq!(c.spin_count(), 20);
    }

    #[test]
    fn test_snapshot_matches_state() {
        let mut c = controller(4);
        c.request_spin(0, &mut ());
        c.tick(500, &mut ());

        let mut s = MachineSnapshot::default();
        c.snapshot_into(&mut s);
        assert_eq!(s.phase, SpinPhase::Spinning);
        assert_eq!(s.balance, 99);
        assert_eq!(s.spin_count, 1);
        assert!(s.running);
        assert!(!s.can_spin());
        for (snap, reel) in s.reels.iter().zip(c.reels()) {
            assert_eq!(snap.position, reel.position());
            assert_eq!(snap.centered, Some(reel.centered_symbol().unwrap()));
        }
    }

    #[test]
    fn test_snapshot_predicts_accepted_actions() {
        let mut c = controller(9);
        let mut s = MachineSnapshot::default();
        let mut now = 0;
        for action in [
            SpinAction::Stop,
            SpinAction::Spin,
            SpinAction::Spin,
            SpinAction::Toggle,
            SpinAction::Stop,
            SpinAction::Toggle,
        ] {
            c.snapshot_into(&mut s);
            let predicted = s.accepts(action);
            assert_eq!(c.handle_action(action, now, &mut ()), predicted, "{action:?}");
            now += 16;
            c.tick(now, &mut ());
        }
    }
}
