//! Navigation transitions
//!
//! Every location the client can be at is a [`NavFrame`]; moving
//! forward pushes the current frame onto the history and back pops one
//! and rebuilds it with a fresh fetch. Overlays sit on top of the
//! current frame and never touch the history or the content view.

use stackscope_core::types::{ResourceKind, ResourceRef};

use crate::model::{App, Mode, NavFrame};
use crate::pages::{
    ChildView, DetailModel, GraphModel, ListModel, SearchModel, ShellModel, TopologyModel,
};

pub fn enter_list(app: &mut App, kind: ResourceKind) {
    goto(app, NavFrame::List(kind));
}

pub fn enter_detail(app: &mut App, reference: ResourceRef) {
    goto(app, NavFrame::Detail(reference));
}

pub fn enter_graph(app: &mut App, focal: ResourceRef) {
    goto(app, NavFrame::Graph(focal));
}

pub fn enter_topology(app: &mut App) {
    goto(app, NavFrame::Topology);
}

pub fn enter_search(app: &mut App) {
    goto(app, NavFrame::Search);
}

/// Shell output is not rebuildable (backing would re-run the command),
/// so it lives outside the frame model: the current frame stays put
/// and back navigation rebuilds it.
pub fn enter_shell(app: &mut App, command: String) {
    app.history.push(app.location.clone());
    app.mode = Mode::Shell;
    set_child(app, Box::new(ShellModel::new(command)));
}

/// Graph key: toggle out of a graph, or into one if the current view
/// has something to focus on.
pub fn toggle_graph(app: &mut App) {
    if app.mode == Mode::Graph {
        go_back(app);
        return;
    }
    let focal = app.child.as_ref().and_then(|child| child.graph_focal());
    match focal {
        Some(focal) => enter_graph(app, focal),
        None => app.set_status("Nothing to graph here"),
    }
}

pub fn go_back(app: &mut App) {
    if app.mode.is_overlay() {
        close_overlay(app);
        return;
    }
    match app.history.pop() {
        Some(frame) => apply(app, frame),
        None => apply(app, NavFrame::Sidebar),
    }
}

pub fn open_overlay(app: &mut App, overlay: Mode) {
    if !app.mode.is_overlay() {
        app.overlay_return = Some(app.mode);
    }
    app.mode = overlay;
}

pub fn close_overlay(app: &mut App) {
    let fallback = mode_of(&app.location);
    app.mode = app.overlay_return.take().unwrap_or(fallback);
}

pub fn open_cloud_select(app: &mut App) {
    let clouds = app.backend.clouds.clone();
    let active = app.backend.cloud.name().to_owned();
    app.cloud_select.open(clouds, &active);
    open_overlay(app, Mode::CloudSelect);
}

/// After a cloud switch nothing on screen is valid anymore.
pub fn reset_to_sidebar(app: &mut App) {
    app.history.clear();
    app.overlay_return = None;
    apply(app, NavFrame::Sidebar);
}

fn goto(app: &mut App, frame: NavFrame) {
    if app.location != frame {
        app.history.push(app.location.clone());
    }
    apply(app, frame);
}

/// Makes `frame` the current location, dispatching its fetch.
fn apply(app: &mut App, frame: NavFrame) {
    app.overlay_return = None;
    match &frame {
        NavFrame::Sidebar => {
            app.mode = Mode::Sidebar;
            app.child = None;
            app.current_kind = None;
            app.focal = None;
        }
        NavFrame::List(kind) => {
            app.mode = Mode::List;
            app.current_kind = Some(*kind);
            app.focal = None;
            set_child(app, Box::new(ListModel::new(*kind)));
        }
        NavFrame::Detail(reference) => {
            app.mode = Mode::Detail;
            set_child(app, Box::new(DetailModel::new(reference.clone())));
        }
        NavFrame::Graph(focal) => {
            app.mode = Mode::Graph;
            app.focal = Some(focal.clone());
            set_child(app, Box::new(GraphModel::new(focal.clone())));
        }
        NavFrame::Topology => {
            app.mode = Mode::Topology;
            set_child(app, Box::new(TopologyModel::new()));
        }
        NavFrame::Search => {
            app.mode = Mode::Search;
            set_child(app, Box::new(SearchModel::new()));
        }
    }
    app.location = frame;
}

fn set_child(app: &mut App, mut child: Box<dyn ChildView>) {
    child.init(&app.backend);
    app.child = Some(child);
}

fn mode_of(frame: &NavFrame) -> Mode {
    match frame {
        NavFrame::Sidebar => Mode::Sidebar,
        NavFrame::List(_) => Mode::List,
        NavFrame::Detail(_) => Mode::Detail,
        NavFrame::Graph(_) => Mode::Graph,
        NavFrame::Topology => Mode::Topology,
        NavFrame::Search => Mode::Search,
    }
}
