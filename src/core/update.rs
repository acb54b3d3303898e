use crate::{
    core::cmd::Cmd,
    core::msg::{copy::CopyMsg, grid::GridMsg, selection::SelectionMsg, Msg},
    core::state::AppState,
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        // Selection messages (delegated to SelectionState, commits go to the copy surface)
        Msg::Selection(selection_msg) => {
            let starts_new = selection_msg.starts_new_selection();
            let clear = matches!(selection_msg, SelectionMsg::Clear);
            let before = state.selection.active().clone();
            let scope = state.selection.update(selection_msg, &state.grid);
            // events the store ignored leave the copy surface alone
            if clear || (starts_new && state.selection.active() != &before) {
                state.copy.invalidate();
            }
            let commands = match scope {
                Some(scope) => {
                    let request =
                        scope.into_request(&state.grid.data_id, !state.copy.strip_header);
                    if request.columns().is_empty() {
                        log::warn!("Copy skipped: no visible columns in selection");
                        vec![]
                    } else {
                        state.copy.request(request)
                    }
                }
                None => vec![],
            };
            (state, commands)
        }

        // Copy surface messages (delegated to CopySurfaceState)
        Msg::Copy(copy_msg) => {
            // only the write issued for the current surface clears the selection it copied
            let written =
                matches!(copy_msg, CopyMsg::ClipboardWritten) && state.copy.is_writing();
            let commands = state.copy.update(copy_msg);
            if written {
                state.selection.clear();
            }
            (state, commands)
        }

        // Grid messages (delegated to GridState)
        Msg::Grid(grid_msg) => {
            let refreshed = matches!(grid_msg, GridMsg::DataRefreshed | GridMsg::SetDataId(_));
            let commands = state.grid.update(grid_msg);
            if refreshed {
                // Selections do not survive a reload of the data
                state.selection.clear();
                state.copy.invalidate();
            } else {
                state.selection.retain_within(&state.grid);
            }
            (state, commands)
        }
    }
}
