use std::time::{ Duration, Instant };

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameState {
    /// Too soon since the last accepted frame; nothing to draw
    Waiting,
    /// Interval elapsed; run one update + draw
    Rendering,
}

/// Fixed-timestep gate. A poll is accepted once at least `interval` has
/// passed since the previous accepted poll, and the clock then restarts
/// from the accepting timestamp.
#[derive(Clone, Debug)]
pub struct FrameGate {
    interval: Duration,
    last_accepted: Instant,
}

impl FrameGate {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self { interval, last_accepted: now }
    }

    pub fn poll(&mut self, now: Instant) -> FrameState {
        if now.saturating_duration_since(self.last_accepted) >= self.interval {
            self.last_accepted = now;
            FrameState::Rendering
        } else {
            FrameState::Waiting
        }
    }

    pub fn last_accepted(&self) -> Instant {
        self.last_accepted
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn accepts_once_when_cumulative_time_reaches_interval() {
        let start = Instant::now();
        let mut gate = FrameGate::new(ms(10), start);

        let mut now = start;
        let mut accepted = Vec::new();
        for delta in [3, 4, 3, 2] {
            now += ms(delta);
            accepted.push(gate.poll(now));
        }

        assert_eq!(
            accepted,
            vec![FrameState::Waiting, FrameState::Waiting, FrameState::Rendering, FrameState::Waiting]
        );
        // Restarted from the accepting poll, not from zero or from the last poll
        assert_eq!(gate.last_accepted(), start + ms(10));
    }

    #[test]
    fn waiting_polls_do_not_move_the_clock() {
        let start = Instant::now();
        let mut gate = FrameGate::new(ms(10), start);
        assert_eq!(gate.poll(start + ms(9)), FrameState::Waiting);
        assert_eq!(gate.last_accepted(), start);
    }

    #[test]
    fn late_poll_is_a_single_frame() {
        let start = Instant::now();
        let mut gate = FrameGate::new(ms(10), start);
        assert_eq!(gate.poll(start + ms(55)), FrameState::Rendering);
        assert_eq!(gate.poll(start + ms(56)), FrameState::Waiting);
        assert_eq!(gate.poll(start + ms(65)), FrameState::Rendering);
    }

    #[test]
    fn clock_going_backwards_waits() {
        let start = Instant::now() + ms(100);
        let mut gate = FrameGate::new(ms(10), start);
        assert_eq!(gate.poll(start - ms(50)), FrameState::Waiting);
    }

    #[test]
    fn zero_interval_accepts_every_poll() {
        let start = Instant::now();
        let mut gate = FrameGate::new(Duration::ZERO, start);
        assert_eq!(gate.poll(start), FrameState::Rendering);
        assert_eq!(gate.poll(start), FrameState::Rendering);
        assert_eq!(gate.interval(), Duration::ZERO);
    }
}
