use std::time::Instant;

use crate::App;
use lepeva::Screen;
use ratatui::Frame;

use super::{
    breadcrumb, confetti, contents, dialogs, header, landing,
    layout,
    legend::{self, LegendContext},
    search, status_bar, theme, toast, uploader,
};

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();
    let now = Instant::now();
    let style = theme::style_for(app.model.ui.theme);

    if app.model.ui.screen == Screen::Landing {
        landing::render_landing(f, size, style, app.model.ui.started_at, now);
        if let Some(confetti) = &app.model.ui.confetti {
            confetti::render_confetti(f, size, confetti, now);
        }
        return;
    }

    let ui = &app.model.ui;
    let nav = &app.model.navigation;

    let legend_ctx = LegendContext {
        vim_mode: ui.vim_mode,
        at_root: nav.is_at_root(),
        dragging: nav.is_dragging(),
        search_mode: ui.search_mode,
        has_search_query: !ui.search_query.is_empty(),
    };
    let search_visible = ui.search_mode || !ui.search_query.is_empty();
    let legend_height = legend::calculate_legend_height(size.width, legend_ctx);
    let layout_info = layout::calculate_layout(size, legend_height, search_visible);

    header::render_header(
        f,
        layout_info.header_area,
        ui.theme,
        ui.active_tip,
        style,
        ui.started_at,
        now,
    );

    breadcrumb::render_breadcrumb_bar(f, layout_info.breadcrumb_area, &nav.path, style);

    let columns = {
        let entries = app.model.visible_entries();
        contents::render_contents(
            f,
            layout_info.contents_area,
            &entries,
            nav.selected,
            nav.drag.as_ref(),
            &ui.search_query,
            &app.icon_renderer,
            style,
        )
    };

    uploader::render_uploader(
        f,
        layout_info.uploader_area,
        &ui.upload_phase,
        ui.upload_error.as_deref(),
        &app.upload_policy,
        style,
        now,
    );

    if let Some(search_area) = layout_info.search_area {
        let match_count = app.model.visible_folders().len() + app.model.visible_materials().len();
        search::render_search_input(
            f,
            search_area,
            &ui.search_query,
            ui.search_mode,
            match_count,
            ui.vim_mode,
        );
    }

    legend::render_legend(f, layout_info.legend_area, legend_ctx);

    status_bar::render_status_bar(
        f,
        layout_info.status_area,
        nav.current_folder_name(),
        app.model.visible_folders().len(),
        app.model.visible_materials().len(),
        app.model.selected_entry(),
        nav.drag.as_ref().map(|d| d.name.as_str()),
    );

    if let Some(dialog) = &ui.input_dialog {
        dialogs::render_input_dialog(
            f,
            dialog,
            nav.current_folder_name().unwrap_or("Home"),
            &app.upload_policy,
        );
    }

    if let Some(confetti) = &ui.confetti {
        confetti::render_confetti(f, size, confetti, now);
    }

    // Toast goes last so it is never hidden
    if let Some((message, _)) = &ui.toast_message {
        toast::render_toast(f, size, message);
    }

    app.grid_columns = columns;
}
