//! Update layer
//!
//! Consumes messages and mutates the model. The only place the model
//! changes.

mod navigation;

use crate::message::{AppMessage, CloudSelectMessage, CommandMessage, SidebarMessage};
use crate::model::{App, CommandAction, CommandTarget, Mode, SidebarEntry};
use crate::pages::ChildOutcome;

/// Handles an application message, updating the state
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }
        AppMessage::ShowHelp => {
            navigation::open_overlay(app, Mode::Help);
        }
        AppMessage::OpenCommand => {
            app.command.reset();
            navigation::open_overlay(app, Mode::Command);
        }
        AppMessage::OpenCloudSelect => {
            navigation::open_cloud_select(app);
        }
        AppMessage::EnterTopology => {
            navigation::enter_topology(app);
        }
        AppMessage::EnterSearch => {
            navigation::enter_search(app);
        }
        AppMessage::GoBack => {
            navigation::go_back(app);
        }
        AppMessage::ToggleGraph => {
            navigation::toggle_graph(app);
        }
        AppMessage::Refresh => {
            if let Some(child) = app.child.as_mut() {
                child.init(&app.backend);
                app.set_status("Refreshing");
            }
        }
        AppMessage::Sidebar(msg) => sidebar(app, msg),
        AppMessage::Command(msg) => command(app, msg),
        AppMessage::CloudSelect(msg) => cloud_select(app, msg),
        AppMessage::Child(key) => {
            app.clear_status();
            let outcome = match app.child.as_mut() {
                Some(child) => child.handle_key(key, &app.backend),
                None => None,
            };
            match outcome {
                Some(ChildOutcome::OpenDetail(reference)) => {
                    navigation::enter_detail(app, reference);
                }
                Some(ChildOutcome::Status(message)) => app.set_status(message),
                None => {}
            }
        }
        AppMessage::Loaded { request, payload } => match app.child.as_mut() {
            Some(child) if child.pending_request() == Some(request) => child.on_load(payload),
            // Superseded by a newer fetch or a navigation change.
            _ => log::debug!("dropping stale fetch completion {request}"),
        },
        AppMessage::Noop => {}
    }
}

fn sidebar(app: &mut App, msg: SidebarMessage) {
    match msg {
        SidebarMessage::Up => app.sidebar.select_prev(),
        SidebarMessage::Down => app.sidebar.select_next(),
        SidebarMessage::Select => match app.sidebar.current() {
            SidebarEntry::Kind(kind) => navigation::enter_list(app, kind),
            SidebarEntry::Topology => navigation::enter_topology(app),
            SidebarEntry::Quit => app.should_quit = true,
            SidebarEntry::Section(_) => {}
        },
    }
}

fn command(app: &mut App, msg: CommandMessage) {
    match msg {
        CommandMessage::Input(c) => app.command.push(c),
        CommandMessage::Backspace => app.command.backspace(),
        CommandMessage::Complete => app.command.complete(),
        CommandMessage::Cancel => navigation::close_overlay(app),
        CommandMessage::Submit => {
            let action = app.command.parse();
            let input = app.command.input.trim().to_owned();
            navigation::close_overlay(app);
            match action {
                Some(CommandAction::Target(target)) => run_target(app, target),
                Some(CommandAction::Shell(cmd)) => navigation::enter_shell(app, cmd),
                None if input.is_empty() => {}
                None => app.set_status(format!("Unknown command: {input}")),
            }
        }
    }
}

fn run_target(app: &mut App, target: CommandTarget) {
    match target {
        CommandTarget::Kind(kind) => navigation::enter_list(app, kind),
        CommandTarget::Topology => navigation::enter_topology(app),
        CommandTarget::Clouds => navigation::open_cloud_select(app),
        CommandTarget::Help => navigation::open_overlay(app, Mode::Help),
        CommandTarget::Quit => app.should_quit = true,
    }
}

fn cloud_select(app: &mut App, msg: CloudSelectMessage) {
    match msg {
        CloudSelectMessage::Up => app.cloud_select.select_prev(),
        CloudSelectMessage::Down => app.cloud_select.select_next(),
        CloudSelectMessage::Cancel => navigation::close_overlay(app),
        CloudSelectMessage::Select => {
            let Some(name) = app.cloud_select.current().map(str::to_owned) else {
                return;
            };
            app.backend.switch_cloud(&name);
            navigation::reset_to_sidebar(app);
            app.set_status(format!("Switched to cloud {name}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::{self, Receiver};

    use tokio::runtime::Runtime;

    use stackscope_core::types::{ResourceKind, ResourceRef};

    use super::*;
    use crate::backend::{Backend, CloudService, Dispatcher};
    use crate::message::LoadPayload;
    use crate::model::NavFrame;

    // The runtime must outlive the app so dispatched fetches have
    // somewhere to run.
    fn test_app() -> (App, Runtime, Receiver<AppMessage>) {
        let runtime = Runtime::new().unwrap();
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(runtime.handle().clone(), tx);
        let backend = Backend::new(
            dispatcher,
            CloudService::demo("demo"),
            vec!["demo".to_owned(), "prod".to_owned()],
        );
        (App::new(backend), runtime, rx)
    }

    fn select_kind(app: &mut App, kind: ResourceKind) {
        while app.sidebar.current() != crate::model::SidebarEntry::Kind(kind) {
            app.sidebar.select_next();
        }
        update(app, AppMessage::Sidebar(SidebarMessage::Select));
    }

    #[test]
    fn quit_message_stops_the_loop() {
        let (mut app, _rt, _rx) = test_app();
        update(&mut app, AppMessage::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn sidebar_select_opens_a_list() {
        let (mut app, _rt, _rx) = test_app();
        select_kind(&mut app, ResourceKind::Server);
        assert_eq!(app.mode, Mode::List);
        assert_eq!(app.current_kind, Some(ResourceKind::Server));
        assert!(app.child.is_some());
    }

    #[test]
    fn back_from_list_returns_to_sidebar() {
        let (mut app, _rt, _rx) = test_app();
        select_kind(&mut app, ResourceKind::Volume);
        update(&mut app, AppMessage::GoBack);
        assert_eq!(app.mode, Mode::Sidebar);
        assert!(app.child.is_none());
    }

    #[test]
    fn help_overlay_keeps_the_view_underneath() {
        let (mut app, _rt, _rx) = test_app();
        update(&mut app, AppMessage::EnterTopology);
        let pending = app.child.as_ref().unwrap().pending_request();

        update(&mut app, AppMessage::ShowHelp);
        assert_eq!(app.mode, Mode::Help);
        // The topology view and its in-flight fetch survive the overlay.
        assert_eq!(app.child.as_ref().unwrap().pending_request(), pending);

        update(&mut app, AppMessage::GoBack);
        assert_eq!(app.mode, Mode::Topology);
        assert_eq!(app.child.as_ref().unwrap().pending_request(), pending);
    }

    #[test]
    fn help_over_graph_returns_to_graph() {
        let (mut app, _rt, _rx) = test_app();
        let focal = ResourceRef::new(ResourceKind::Server, "srv-1", "web1");
        navigation::enter_graph(&mut app, focal.clone());
        assert_eq!(app.mode, Mode::Graph);

        update(&mut app, AppMessage::ShowHelp);
        assert_eq!(app.mode, Mode::Help);

        update(&mut app, AppMessage::GoBack);
        assert_eq!(app.mode, Mode::Graph);
        assert_eq!(app.location, NavFrame::Graph(focal));
    }

    #[test]
    fn stale_completion_is_dropped() {
        let (mut app, _rt, _rx) = test_app();
        select_kind(&mut app, ResourceKind::Server);
        let pending = app.child.as_ref().unwrap().pending_request().unwrap();

        update(
            &mut app,
            AppMessage::Loaded {
                request: pending + 100,
                payload: LoadPayload::Rows(Ok(Vec::new())),
            },
        );
        // Still waiting for the real one.
        assert_eq!(
            app.child.as_ref().unwrap().pending_request(),
            Some(pending)
        );

        update(
            &mut app,
            AppMessage::Loaded {
                request: pending,
                payload: LoadPayload::Rows(Ok(Vec::new())),
            },
        );
        assert_eq!(app.child.as_ref().unwrap().pending_request(), None);
    }

    #[test]
    fn command_submit_navigates_to_topology() {
        let (mut app, _rt, _rx) = test_app();
        update(&mut app, AppMessage::OpenCommand);
        assert_eq!(app.mode, Mode::Command);
        for c in "topo".chars() {
            update(&mut app, AppMessage::Command(CommandMessage::Input(c)));
        }
        update(&mut app, AppMessage::Command(CommandMessage::Submit));
        assert_eq!(app.mode, Mode::Topology);
    }

    #[test]
    fn unknown_command_reports_and_stays_put() {
        let (mut app, _rt, _rx) = test_app();
        update(&mut app, AppMessage::OpenCommand);
        for c in "frobnicate".chars() {
            update(&mut app, AppMessage::Command(CommandMessage::Input(c)));
        }
        update(&mut app, AppMessage::Command(CommandMessage::Submit));
        assert_eq!(app.mode, Mode::Sidebar);
        assert!(app
            .status_message
            .as_deref()
            .is_some_and(|m| m.contains("frobnicate")));
    }

    #[test]
    fn switching_clouds_resets_navigation() {
        let (mut app, _rt, _rx) = test_app();
        select_kind(&mut app, ResourceKind::Server);
        update(&mut app, AppMessage::OpenCloudSelect);
        update(&mut app, AppMessage::CloudSelect(CloudSelectMessage::Down));
        update(&mut app, AppMessage::CloudSelect(CloudSelectMessage::Select));

        assert_eq!(app.backend.cloud.name(), "prod");
        assert_eq!(app.mode, Mode::Sidebar);
        assert!(app.history.is_empty());
        assert_eq!(app.location, NavFrame::Sidebar);
    }

    #[test]
    fn graph_toggle_without_focus_only_sets_status() {
        let (mut app, _rt, _rx) = test_app();
        update(&mut app, AppMessage::EnterTopology);
        update(&mut app, AppMessage::ToggleGraph);
        assert_eq!(app.mode, Mode::Topology);
        assert!(app.status_message.is_some());
    }
}
