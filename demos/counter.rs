//! Interactive terminal counter.
//!
//! Enter increments, Backspace decrements, `q` or Ctrl-C quits. The
//! renderable carries its own keybindings, so the terminal task stays a dumb
//! display-and-input shell: every state change goes through a dispatch.
//!
//! Run with `cargo run --example counter`.

use std::io;

use color_eyre::eyre::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use futures::StreamExt;
use ratatui::Terminal;
use ratatui::prelude::CrosstermBackend;
use ratatui::widgets::{Block, Paragraph};
use steep::prelude::*;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone)]
enum Message {
    Increment,
    Decrement,
}

#[derive(Debug, Clone, Default)]
struct CounterModel {
    count: i64,
}

struct Keybinding {
    code: KeyCode,
    action: Box<dyn Fn() + Send>,
}

struct CounterView {
    title: String,
    contents: String,
    keybindings: Vec<Keybinding>,
}

struct CounterApp;

impl Application for CounterApp {
    type Model = CounterModel;
    type Message = Message;
    type Renderable = CounterView;

    fn init(&self) -> CounterModel {
        CounterModel::default()
    }

    fn update(&self, msg: Message, model: CounterModel) -> (CounterModel, Command<Message>) {
        let count = match msg {
            Message::Increment => model.count + 1,
            Message::Decrement => model.count - 1,
        };
        (CounterModel { count }, Command::none())
    }

    fn view(&self, model: &CounterModel, dispatcher: Dispatcher<Message>) -> CounterView {
        let increment = dispatcher.clone();
        let decrement = dispatcher;

        CounterView {
            title: "Counter".to_string(),
            contents: format!(
                "Enter to Increment - Backspace to Decrement - q to Quit\n\nCount is: {}",
                model.count
            ),
            keybindings: vec![
                Keybinding {
                    code: KeyCode::Enter,
                    action: Box::new(move || increment.dispatch(Message::Increment)),
                },
                Keybinding {
                    code: KeyCode::Backspace,
                    action: Box::new(move || decrement.dispatch(Message::Decrement)),
                },
            ],
        }
    }
}

/// Forwards each view to the terminal task; the runtime loop never touches
/// the terminal directly.
struct ChannelRenderer {
    tx: mpsc::UnboundedSender<CounterView>,
}

impl Renderer<CounterView> for ChannelRenderer {
    fn render(&mut self, view: CounterView) {
        let _ = self.tx.send(view);
    }
}

async fn drive_terminal(
    mut terminal: Terminal<CrosstermBackend<io::Stdout>>,
    mut views: mpsc::UnboundedReceiver<CounterView>,
    token: CancellationToken,
) -> Result<()> {
    let mut events = EventStream::new();
    let mut current: Option<CounterView> = None;

    loop {
        tokio::select! {
            _ = token.cancelled() => break,
            view = views.recv() => {
                let Some(view) = view else { break };
                draw(&mut terminal, &view)?;
                current = Some(view);
            }
            event = events.next() => {
                let Some(Ok(Event::Key(key))) = event else { continue };
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if is_quit(&key) {
                    token.cancel();
                    continue;
                }
                if let Some(view) = &current {
                    for binding in &view.keybindings {
                        if binding.code == key.code {
                            (binding.action)();
                        }
                    }
                }
            }
        }
    }

    Ok(())
}

fn draw(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, view: &CounterView) -> Result<()> {
    terminal.draw(|frame| {
        let widget = Paragraph::new(view.contents.as_str())
            .block(Block::bordered().title(view.title.as_str()));
        frame.render_widget(widget, frame.area());
    })?;
    Ok(())
}

fn is_quit(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('q')
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // Setup terminal
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    let (tx, views) = mpsc::unbounded_channel();
    let runtime = Runtime::new(CounterApp);
    let token = runtime.cancellation_token();

    let ui = tokio::spawn(drive_terminal(terminal, views, token));
    let handle = runtime.spawn(ChannelRenderer { tx });

    // The terminal task cancels the shared token on quit.
    let model = handle.stopped().await;
    let ui_result = ui.await;

    // Restore terminal
    terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), terminal::LeaveAlternateScreen)?;

    println!("Final count: {}", model.count);
    ui_result??;

    Ok(())
}
