use std::{collections::HashMap, sync::Arc};

use color_eyre::eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::layout::{Constraint, Layout, Rect};
use tokio::sync::mpsc::{self, UnboundedSender};
use tracing::{debug, error, info};

use crate::{
  action::Action,
  cli::Cli,
  components::{
    AlertBanner, AsyncComponent, Component, FiltersView, NavBar, RenterListView, shared::NavButton,
  },
  config::Config,
  mode::Mode,
  navigation::{History, Page},
  renters::{
    FileRenterDirectory, FriendService, MemoryFriendService, RenterDirectory, RenterFilter, RenterId, RenterRecord,
    Session,
  },
  tui::{self, Frame, Tui},
  utils::get_data_dir,
};

const NAV_BAR_HEIGHT: u16 = 3;

pub struct App {
  pub config: Config,
  pub tick_rate: f64,
  pub frame_rate: f64,
  pub should_quit: bool,
  pub should_suspend: bool,
  pub mode: Mode,
  directory: Arc<dyn RenterDirectory>,
  renters: Vec<RenterRecord>,
  /// Friend changes made this session; they outlive reloads of the records file.
  friendships: HashMap<RenterId, bool>,
  filter: RenterFilter,
  renter_list: RenterListView,
  filters: FiltersView,
  alert: AlertBanner,
  nav_bar: NavBar,
}

impl App {
  pub fn new(args: Cli) -> Result<Self> {
    let config = Config::new()?;
    let renters_file = args
      .renters
      .or_else(|| config.renters_file.clone())
      .unwrap_or_else(|| get_data_dir().join("renters.json5"));
    let viewer_id = args.viewer.unwrap_or_else(|| config.viewer_id.clone());
    info!("Browsing {} as {}", renters_file.display(), viewer_id);

    let mut app = Self::with_parts(
      config,
      Arc::new(FileRenterDirectory::new(renters_file)),
      Arc::new(MemoryFriendService::new()),
      Session::new(viewer_id),
    );
    app.tick_rate = args.tick_rate;
    app.frame_rate = args.frame_rate;
    Ok(app)
  }

  pub fn with_parts(
    config: Config,
    directory: Arc<dyn RenterDirectory>,
    friends: Arc<dyn FriendService>,
    session: Session,
  ) -> Self {
    let nav_bar = NavBar::new(
      Box::new(History::new(Page::Renters)),
      vec![NavButton::new(Page::Renters, "Renters", true), NavButton::new(Page::Filters, "Filters", false)],
    );
    Self {
      config,
      tick_rate: 10.0,
      frame_rate: 30.0,
      should_quit: false,
      should_suspend: false,
      mode: Mode::Default,
      directory,
      renters: Vec::new(),
      friendships: HashMap::new(),
      filter: RenterFilter::default(),
      renter_list: RenterListView::new(session, friends),
      filters: FiltersView::new(),
      alert: AlertBanner::new(),
      nav_bar,
    }
  }

  pub async fn run(&mut self) -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::unbounded_channel();

    let mut tui = Tui::new()?.tick_rate(self.tick_rate).frame_rate(self.frame_rate);
    tui.enter()?;

    self.register_action_handlers(&action_tx)?;
    action_tx.send(Action::Refresh)?;

    loop {
      if let Some(e) = tui.next().await {
        match e {
          tui::Event::Quit => action_tx.send(Action::Quit)?,
          tui::Event::Tick => action_tx.send(Action::Tick)?,
          tui::Event::Render => action_tx.send(Action::Render)?,
          tui::Event::Resize(x, y) => action_tx.send(Action::Resize(x, y))?,
          tui::Event::Key(key) => {
            if let Some(action) = self.handle_key_event(key).await? {
              action_tx.send(action)?;
            }
          },
          _ => {},
        }
      }

      while let Ok(action) = action_rx.try_recv() {
        if action != Action::Tick && action != Action::Render {
          debug!("{action:?}");
        }
        match action {
          Action::Resize(w, h) => {
            tui.resize(Rect::new(0, 0, w, h))?;
            self.draw(&mut tui, &action_tx)?;
          },
          Action::Render => self.draw(&mut tui, &action_tx)?,
          action => {
            for follow_up in self.dispatch(action, &action_tx).await? {
              action_tx.send(follow_up)?;
            }
          },
        }
      }

      if self.should_suspend {
        tui.suspend()?;
        action_tx.send(Action::Resume)?;
        tui = Tui::new()?.tick_rate(self.tick_rate).frame_rate(self.frame_rate);
        tui.enter()?;
      } else if self.should_quit {
        tui.stop()?;
        break;
      }
    }
    tui.exit()?;
    Ok(())
  }

  fn register_action_handlers(&mut self, tx: &UnboundedSender<Action>) -> Result<()> {
    self.renter_list.register_action_handler(tx.clone())?;
    self.filters.register_action_handler(tx.clone())?;
    self.alert.register_action_handler(tx.clone())?;
    self.nav_bar.register_action_handler(tx.clone())?;
    Ok(())
  }

  /// Outside input mode alerts get first refusal, then configured bindings, then page buttons, then the page itself.
  pub async fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
    let event = Some(tui::Event::Key(key));
    if self.mode == Mode::Default
      && let Some(action) = self.alert.handle_events(event.clone()).await?
    {
      return Ok(Some(action));
    }
    if let Some(action) = self.config.action_for(self.mode, key) {
      return Ok(Some(action));
    }
    if self.mode == Mode::Default
      && let Some(action) = self.nav_bar.handle_events(event.clone()).await?
    {
      return Ok(Some(action));
    }
    match self.nav_bar.current() {
      Page::Renters => self.renter_list.handle_events(event).await,
      Page::Filters => self.filters.handle_events(event).await,
    }
  }

  /// Applies an action to the app and every component, returning the follow-up actions they produced.
  pub async fn dispatch(&mut self, action: Action, tx: &UnboundedSender<Action>) -> Result<Vec<Action>> {
    match &action {
      Action::StartInputMode => self.mode = Mode::Input,
      Action::EndInputMode => self.mode = Mode::Default,
      Action::Quit => self.should_quit = true,
      Action::Suspend => self.should_suspend = true,
      Action::Resume => self.should_suspend = false,
      Action::Refresh => self.load_renters(tx.clone()),
      Action::RentersLoaded(renters) => {
        self.renters = renters.clone();
        self.apply_friendships();
        self.show_filtered();
      },
      Action::FilterChanged(filter) => {
        self.filter = *filter;
        self.show_filtered();
      },
      Action::FriendsChanged(id, is_friend) => {
        self.friendships.insert(id.clone(), *is_friend);
        self.apply_friendships();
        self.show_filtered();
      },
      Action::Error(message) => error!("{}", message),
      _ => {},
    }

    let mut follow_ups = Vec::new();
    follow_ups.extend(self.renter_list.update(action.clone()).await?);
    follow_ups.extend(self.filters.update(action.clone()).await?);
    follow_ups.extend(self.alert.update(action.clone()).await?);
    follow_ups.extend(self.nav_bar.update(action).await?);
    follow_ups.dedup();
    Ok(follow_ups)
  }

  fn apply_friendships(&mut self) {
    for renter in self.renters.iter_mut() {
      if let Some(is_friend) = self.friendships.get(&renter.renter_id) {
        renter.is_friend = *is_friend;
      }
    }
  }

  fn show_filtered(&mut self) {
    let visible = self.filter.apply(&self.renters);
    debug!("Showing {} of {} renters", visible.len(), self.renters.len());
    self.renter_list.set_renters(visible);
  }

  fn load_renters(&self, tx: UnboundedSender<Action>) {
    let directory = self.directory.clone();
    tokio::spawn(async move {
      let action = match directory.renters().await {
        Ok(renters) => Action::RentersLoaded(renters),
        Err(err) => {
          error!("Failed to load renters: {}", err);
          Action::Error(format!("Failed to load renters: {err}"))
        },
      };
      let _ = tx.send(action);
      let _ = tx.send(Action::SetLoading(false));
    });
  }

  fn draw(&mut self, tui: &mut Tui, action_tx: &UnboundedSender<Action>) -> Result<()> {
    tui.draw(|f| {
      if let Err(e) = self.render(f, f.area()) {
        let _ = action_tx.send(Action::Error(format!("Failed to draw: {:?}", e)));
      }
    })?;
    Ok(())
  }

  fn render(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
    let [nav_area, alert_area, page_area] = Layout::vertical([
      Constraint::Length(NAV_BAR_HEIGHT),
      Constraint::Length(self.alert.height()),
      Constraint::Min(1),
    ])
    .areas(area);

    self.nav_bar.draw(f, nav_area)?;
    self.alert.draw(f, alert_area)?;
    match self.nav_bar.current() {
      Page::Renters => self.renter_list.draw(f, page_area),
      Page::Filters => self.filters.draw(f, page_area),
    }
  }
}
