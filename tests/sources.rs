// Integration tests for message sources feeding a running loop.

use steep::{
    application::Application,
    command::Command,
    dispatcher::Dispatcher,
    runtime::Runtime,
    source::{self, mock::MockSource, time::Timer},
    testing::RecordingRenderer,
};
use tokio::time::{Duration, timeout};

// Helper: counts timer ticks
struct TickApp;

#[derive(Debug, Clone)]
struct Tick;

impl Application for TickApp {
    type Model = u32;
    type Message = Tick;
    type Renderable = u32;

    fn init(&self) -> u32 {
        0
    }

    fn update(&self, _msg: Tick, model: u32) -> (u32, Command<Tick>) {
        (model + 1, Command::none())
    }

    fn view(&self, model: &u32, _dispatcher: Dispatcher<Tick>) -> u32 {
        *model
    }
}

#[tokio::test]
async fn test_timer_source_drives_transitions() {
    let (renderer, mut renders) = RecordingRenderer::new();
    let handle = Runtime::new(TickApp).spawn(renderer);

    let ticks = source::spawn(Timer::new(10), handle.dispatcher(), |_| Tick);

    assert_eq!(renders.recv().await, Some(0));

    let deadline = Duration::from_secs(1);
    for expected in 1..=3 {
        let render = timeout(deadline, renders.recv()).await.expect("tick should arrive");
        assert_eq!(render, Some(expected));
    }

    ticks.cancel().await;
    let model = handle.shutdown().await;
    assert!(model >= 3);
}

#[tokio::test]
async fn test_cancelled_source_stops_producing() {
    let (renderer, mut renders) = RecordingRenderer::new();
    let handle = Runtime::new(TickApp).spawn(renderer);

    let ticks = source::spawn(Timer::new(10), handle.dispatcher(), |_| Tick);

    assert_eq!(renders.recv().await, Some(0));
    let _ = timeout(Duration::from_secs(1), renders.recv())
        .await
        .expect("first tick should arrive");

    ticks.cancel().await;

    // Let transitions already in the channel drain, then expect silence.
    tokio::time::sleep(Duration::from_millis(50)).await;
    while renders.try_recv().is_ok() {}
    let result = timeout(Duration::from_millis(100), renders.recv()).await;
    assert!(result.is_err(), "no transitions after the source is cancelled");

    handle.shutdown().await;
}

// Helper: records every received value
struct SeqApp;

impl Application for SeqApp {
    type Model = Vec<i32>;
    type Message = i32;
    type Renderable = Vec<i32>;

    fn init(&self) -> Vec<i32> {
        vec![]
    }

    fn update(&self, msg: i32, mut model: Vec<i32>) -> (Vec<i32>, Command<i32>) {
        model.push(msg);
        (model, Command::none())
    }

    fn view(&self, model: &Vec<i32>, _dispatcher: Dispatcher<i32>) -> Vec<i32> {
        model.clone()
    }
}

#[tokio::test]
async fn test_mock_source_emissions_arrive_in_order() {
    let (renderer, mut renders) = RecordingRenderer::new();
    let handle = Runtime::new(SeqApp).spawn(renderer);

    let mock = MockSource::new();
    let driver = mock.clone();
    let feed = source::spawn(mock, handle.dispatcher(), |n| n);

    assert_eq!(renders.recv().await, Some(vec![]));

    for n in [3, 1, 4] {
        driver.emit(n).expect("source running");
    }

    assert_eq!(renders.recv().await, Some(vec![3]));
    assert_eq!(renders.recv().await, Some(vec![3, 1]));
    assert_eq!(renders.recv().await, Some(vec![3, 1, 4]));

    feed.cancel().await;
    assert!(driver.emit(9).is_err(), "stream gone once the source task stops");

    handle.shutdown().await;
}

// Helper: logs (producer, seq) pairs
struct LogApp;

#[derive(Debug, Clone)]
struct Record {
    producer: u8,
    seq: u32,
}

impl Application for LogApp {
    type Model = Vec<Record>;
    type Message = Record;
    type Renderable = usize;

    fn init(&self) -> Vec<Record> {
        vec![]
    }

    fn update(&self, msg: Record, mut model: Vec<Record>) -> (Vec<Record>, Command<Record>) {
        model.push(msg);
        (model, Command::none())
    }

    fn view(&self, model: &Vec<Record>, _dispatcher: Dispatcher<Record>) -> usize {
        model.len()
    }
}

#[tokio::test]
async fn test_interleaved_producers_stay_fifo_per_producer() {
    const PRODUCERS: u8 = 4;
    const PER_PRODUCER: u32 = 50;

    let (renderer, mut renders) = RecordingRenderer::new();
    let handle = Runtime::new(LogApp).spawn(renderer);

    for producer in 0..PRODUCERS {
        let dispatcher = handle.dispatcher();
        tokio::spawn(async move {
            for seq in 0..PER_PRODUCER {
                dispatcher.dispatch(Record { producer, seq });
                tokio::task::yield_now().await;
            }
        });
    }

    let total = (PRODUCERS as usize) * (PER_PRODUCER as usize);
    let mut seen = 0;
    while seen < total {
        seen = timeout(Duration::from_secs(5), renders.recv())
            .await
            .expect("transitions should keep arriving")
            .expect("runtime should still be rendering");
    }

    let log = handle.shutdown().await;
    assert_eq!(log.len(), total, "every message processed exactly once");

    for producer in 0..PRODUCERS {
        let seqs: Vec<u32> = log
            .iter()
            .filter(|r| r.producer == producer)
            .map(|r| r.seq)
            .collect();
        let expected: Vec<u32> = (0..PER_PRODUCER).collect();
        assert_eq!(seqs, expected, "producer {producer} messages must stay FIFO");
    }
}
