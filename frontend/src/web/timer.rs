//! 延迟端口
//!
//! 所有"模拟网络请求"的等待都经过 `Latency`：
//! - `BrowserLatency` 使用 `gloo-timers` 的 `setTimeout` future；
//! - `ManualLatency` 由调用方推进时间，完成顺序确定，测试不必真实等待。

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use futures::channel::oneshot;

#[async_trait(?Send)]
pub trait Latency {
    /// 等待指定时长。每次调用恰好完成一次，不可取消。
    async fn wait(&self, duration: Duration);
}

/// 浏览器定时器
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserLatency;

#[async_trait(?Send)]
impl Latency for BrowserLatency {
    async fn wait(&self, duration: Duration) {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::future::TimeoutFuture::new(millis).await;
    }
}

struct Scheduled {
    deadline: Duration,
    done: oneshot::Sender<()>,
}

#[derive(Default)]
struct Clock {
    now: Duration,
    scheduled: Vec<Scheduled>,
    requested: Vec<Duration>,
}

/// 手动推进的确定性定时器
#[derive(Clone, Default)]
pub struct ManualLatency {
    clock: Rc<RefCell<Clock>>,
}

impl ManualLatency {
    pub fn new() -> Self {
        Self::default()
    }

    /// 推进时间，触发所有到期的等待；返回本次完成的数量
    pub fn advance(&self, by: Duration) -> usize {
        let due = {
            let mut clock = self.clock.borrow_mut();
            clock.now += by;
            let now = clock.now;
            let (due, pending): (Vec<_>, Vec<_>) = clock
                .scheduled
                .drain(..)
                .partition(|s| s.deadline <= now);
            clock.scheduled = pending;
            due
        };
        let fired = due.len();
        for scheduled in due {
            let _ = scheduled.done.send(());
        }
        fired
    }

    /// 尚未完成的等待数量
    pub fn pending(&self) -> usize {
        self.clock.borrow().scheduled.len()
    }

    /// 按调用顺序记录的等待时长
    pub fn requested(&self) -> Vec<Duration> {
        self.clock.borrow().requested.clone()
    }
}

#[async_trait(?Send)]
impl Latency for ManualLatency {
    async fn wait(&self, duration: Duration) {
        let rx = {
            let mut clock = self.clock.borrow_mut();
            clock.requested.push(duration);
            if duration.is_zero() {
                return;
            }
            let (done, rx) = oneshot::channel();
            let deadline = clock.now + duration;
            clock.scheduled.push(Scheduled { deadline, done });
            rx
        };
        let _ = rx.await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::FutureExt;

    #[test]
    fn test_wait_completes_only_after_deadline() {
        let latency = ManualLatency::new();
        let mut wait = latency.wait(Duration::from_millis(1000)).boxed_local();

        assert!((&mut wait).now_or_never().is_none());
        assert_eq!(latency.pending(), 1);

        assert_eq!(latency.advance(Duration::from_millis(999)), 0);
        assert!((&mut wait).now_or_never().is_none());

        assert_eq!(latency.advance(Duration::from_millis(1)), 1);
        assert!(wait.now_or_never().is_some());
        assert_eq!(latency.pending(), 0);
    }

    #[test]
    fn test_zero_wait_is_immediate() {
        let latency = ManualLatency::new();
        assert!(latency.wait(Duration::ZERO).now_or_never().is_some());
        assert_eq!(latency.requested(), vec![Duration::ZERO]);
    }

    #[test]
    fn test_waits_fire_in_deadline_order() {
        let latency = ManualLatency::new();
        let mut short = latency.wait(Duration::from_millis(100)).boxed_local();
        let mut long = latency.wait(Duration::from_millis(300)).boxed_local();
        assert!((&mut short).now_or_never().is_none());
        assert!((&mut long).now_or_never().is_none());

        latency.advance(Duration::from_millis(200));
        assert!((&mut short).now_or_never().is_some());
        assert!((&mut long).now_or_never().is_none());

        latency.advance(Duration::from_millis(100));
        assert!(long.now_or_never().is_some());
    }
}
