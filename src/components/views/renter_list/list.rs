use std::{sync::Arc, time::SystemTime};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
  layout::{Alignment, Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  widgets::{List, ListItem, ListState, Paragraph},
};
use tokio::{sync::mpsc::UnboundedSender, task::spawn};
use tracing::{error, info, warn};

use super::ItemView;
use crate::{
  action::Action,
  components::{
    AsyncComponent, Component,
    shared::{ExpansionSet, InstructionFooter, theme},
  },
  renters::{FriendService, RenterId, RenterRecord, Session},
  tui::Frame,
};

pub const EMPTY_STATE_TEXT: &str = "No Results";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoadingOperation {
  None,
  Loading(SystemTime),
  UpdatingFriends(SystemTime),
}

/// What a render pass draws: the empty-state indicator, or one item view per record in input order.
#[derive(Debug)]
pub enum ListBody<'a> {
  Empty,
  Items(Vec<ItemView<'a>>),
}

pub struct RenterListView {
  session: Session,
  friends: Arc<dyn FriendService>,
  renters: Vec<RenterRecord>,
  expanded: ExpansionSet,
  loading: LoadingOperation,
  list_state: ListState,
  instruction_footer: InstructionFooter,
  action_tx: Option<UnboundedSender<Action>>,
}

impl RenterListView {
  pub fn new(session: Session, friends: Arc<dyn FriendService>) -> Self {
    RenterListView {
      session,
      friends,
      renters: Vec::new(),
      expanded: ExpansionSet::new(),
      loading: LoadingOperation::None,
      list_state: ListState::default(),
      instruction_footer: InstructionFooter::default(),
      action_tx: None,
    }
  }

  /// Replaces the records on display. Expansion state is kept, including ids no longer present.
  pub fn set_renters(&mut self, renters: Vec<RenterRecord>) {
    self.renters = renters;
    let count = self.renters.len();
    match self.list_state.selected() {
      _ if count == 0 => self.list_state.select(None),
      Some(selected) if selected >= count => self.list_state.select(Some(count - 1)),
      None => self.list_state.select(Some(0)),
      Some(_) => {},
    }
  }

  pub fn renters(&self) -> &[RenterRecord] {
    &self.renters
  }

  pub fn expand(&mut self, id: &RenterId) -> bool {
    self.expanded.expand(id)
  }

  pub fn collapse(&mut self, id: &RenterId) -> bool {
    self.expanded.collapse(id)
  }

  pub fn is_expanded(&self, id: &RenterId) -> bool {
    self.expanded.contains(id)
  }

  pub fn body(&self) -> ListBody<'_> {
    if self.renters.is_empty() {
      return ListBody::Empty;
    }
    let viewer = &self.session.viewer_id;
    ListBody::Items(self.renters.iter().map(|renter| ItemView::select(viewer, renter, &self.expanded)).collect())
  }

  fn selected_item(&self) -> Option<ItemView<'_>> {
    let renter = self.renters.get(self.list_state.selected()?)?;
    Some(ItemView::select(&self.session.viewer_id, renter, &self.expanded))
  }

  pub fn select_next(&mut self) {
    let count = self.renters.len();
    if count == 0 {
      return;
    }
    let next_index = match self.list_state.selected() {
      Some(current) if current < count - 1 => current + 1,
      _ => 0,
    };
    self.list_state.select(Some(next_index));
  }

  pub fn select_previous(&mut self) {
    let count = self.renters.len();
    if count == 0 {
      return;
    }
    let prev_index = match self.list_state.selected() {
      Some(current) if current > 0 && current < count => current - 1,
      _ => count - 1,
    };
    self.list_state.select(Some(prev_index));
  }

  fn change_friendship(&mut self, id: RenterId, befriend: bool) {
    let Some(tx) = self.action_tx.clone() else {
      warn!("No action handler registered, dropping friend change for {}", id);
      return;
    };
    let name = self
      .renters
      .iter()
      .find(|renter| renter.renter_id == id)
      .map(|renter| renter.display_name().to_string())
      .unwrap_or_else(|| id.to_string());
    let friends = self.friends.clone();
    let viewer = self.session.viewer_id.clone();
    self.loading = LoadingOperation::UpdatingFriends(SystemTime::now());

    spawn(async move {
      let result =
        if befriend { friends.add_friend(&viewer, &id).await } else { friends.remove_friend(&viewer, &id).await };
      let messages = match result {
        Ok(()) => {
          info!("Friendship with {} set to {}", id, befriend);
          let notice = if befriend { format!("Added {name} as a friend") } else { format!("Removed {name} from friends") };
          vec![Action::FriendsChanged(id, befriend), Action::Notify(notice)]
        },
        Err(err) => {
          error!("Failed to update friendship with {}: {}", id, err);
          vec![Action::Error(format!("Failed to update friendship with {name}: {err}"))]
        },
      };
      for action in messages.into_iter().chain([Action::SetLoading(false)]) {
        let _ = tx.send(action);
      }
    });
  }

  fn title(&self) -> String {
    match self.loading {
      LoadingOperation::Loading(time) => format!("Loading renters... ({})", format_time_elapsed(time)),
      LoadingOperation::UpdatingFriends(time) => format!("Updating friends... ({})", format_time_elapsed(time)),
      LoadingOperation::None => format!("Renters ({})", self.renters.len()),
    }
  }

  fn instructions(&self) -> Vec<&'static str> {
    let mut instructions = self.selected_item().map(|item| item.instructions()).unwrap_or_default();
    instructions.extend(["↑/↓: Select", "R: Reload"]);
    instructions
  }

  fn render_body(&mut self, f: &mut Frame<'_>, area: Rect) {
    let block = theme::panel(self.title());
    let items: Vec<ListItem<'static>> = match self.body() {
      ListBody::Empty => {
        let empty_state = Paragraph::new(EMPTY_STATE_TEXT)
          .alignment(Alignment::Center)
          .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
          .block(block);
        f.render_widget(empty_state, area);
        return;
      },
      ListBody::Items(views) => views.iter().map(ItemView::render).collect(),
    };

    let list = List::new(items)
      .block(block)
      .style(Style::default().fg(Color::White))
      .highlight_style(Style::default().add_modifier(Modifier::BOLD))
      .highlight_symbol("→ ")
      .repeat_highlight_symbol(false);

    f.render_stateful_widget(list, area, &mut self.list_state);
  }
}

impl Component for RenterListView {
  fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> color_eyre::Result<()> {
    self.action_tx = Some(tx);
    Ok(())
  }

  fn draw(&mut self, frame: &mut Frame<'_>, area: Rect) -> color_eyre::Result<()> {
    let layout = Layout::default().direction(Direction::Vertical).constraints([Constraint::Min(1), Constraint::Length(3)]).split(area);
    self.render_body(frame, layout[0]);
    self.instruction_footer.render(frame, layout[1], self.instructions());
    Ok(())
  }
}

#[async_trait::async_trait]
impl AsyncComponent for RenterListView {
  async fn handle_events(&mut self, event: Option<crate::tui::Event>) -> color_eyre::Result<Option<Action>> {
    match event {
      Some(crate::tui::Event::Key(key)) => Ok(self.handle_key_event(key)),
      _ => Ok(None),
    }
  }

  async fn update(&mut self, action: Action) -> color_eyre::Result<Option<Action>> {
    match action {
      Action::Refresh => {
        self.loading = LoadingOperation::Loading(SystemTime::now());
        Ok(Some(Action::Render))
      },
      Action::RentersLoaded(_) => {
        self.loading = LoadingOperation::None;
        Ok(Some(Action::Render))
      },
      Action::SetLoading(false) => {
        self.loading = LoadingOperation::None;
        Ok(Some(Action::Render))
      },
      Action::SelectNext => {
        self.select_next();
        Ok(Some(Action::Render))
      },
      Action::SelectPrevious => {
        self.select_previous();
        Ok(Some(Action::Render))
      },
      Action::Expand(id) => Ok(self.expand(&id).then_some(Action::Render)),
      Action::Collapse(id) => Ok(self.collapse(&id).then_some(Action::Render)),
      Action::AddFriend(id) => {
        self.change_friendship(id, true);
        Ok(Some(Action::Render))
      },
      Action::RemoveFriend(id) => {
        self.change_friendship(id, false);
        Ok(Some(Action::Render))
      },
      _ => Ok(None),
    }
  }
}

impl RenterListView {
  fn handle_key_event(&self, key: KeyEvent) -> Option<Action> {
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
      return None;
    }
    match key.code {
      KeyCode::Down | KeyCode::Char('j') => Some(Action::SelectNext),
      KeyCode::Up | KeyCode::Char('k') => Some(Action::SelectPrevious),
      KeyCode::Enter | KeyCode::Char(' ') => self.selected_item().map(|item| item.transition()),
      KeyCode::Right | KeyCode::Char('l') => self.selected_item().map(|item| Action::Expand(item.renter().renter_id.clone())),
      KeyCode::Left | KeyCode::Char('h') => {
        self.selected_item().map(|item| Action::Collapse(item.renter().renter_id.clone()))
      },
      KeyCode::Char('f' | 'F') => self.selected_item().and_then(|item| item.friend_action()),
      KeyCode::Char('r' | 'R') => Some(Action::Refresh),
      _ => None,
    }
  }
}

fn format_time_elapsed(time: SystemTime) -> String {
  match time.elapsed() {
    Ok(elapsed) => format!("{:.1}s", elapsed.as_secs_f64()),
    Err(err) => {
      warn!("Failed to get system time {}", err);
      String::from("xs")
    },
  }
}
