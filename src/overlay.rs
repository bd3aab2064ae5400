use crate::constants::PERF_MONITOR_ID;
use singularity_core::PerfStats;
use web_sys as web;

#[inline]
pub fn show_monitor(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(PERF_MONITOR_ID) {
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide_monitor(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(PERF_MONITOR_ID) {
        _ = el.set_attribute("style", "display:none");
    }
}

/// Render the latest reading into the monitor panel
pub fn update_monitor(document: &web::Document, stats: &PerfStats) {
    let Some(el) = document.get_element_by_id(PERF_MONITOR_ID) else {
        return;
    };
    let memory_row = match (stats.memory_mb, stats.memory_band()) {
        (Some(mb), Some(band)) => {
            format!("<div class='{}'>Memory: {}MB</div>", band.css_class(), mb)
        }
        _ => String::new(),
    };
    let mode_class = if stats.low_performance {
        "perf-warn"
    } else {
        "perf-ok"
    };
    let html = format!(
        "<div style='color: #fff; font: 11px ui-monospace, monospace; background: rgba(0, 0, 0, 0.8); padding: 10px 12px; border-radius: 8px; border: 1px solid rgba(255, 255, 255, 0.2);'>\
         <div style='color: #fb923c; font-weight: 600;'>Performance Monitor</div>\
         <div>Device: {}</div>\
         <div class='{}'>FPS: {}</div>\
         {}\
         <div class='{}'>Mode: {}</div>\
         </div>",
        stats.device_label,
        stats.fps_band().css_class(),
        stats.fps,
        memory_row,
        mode_class,
        stats.mode_label()
    );
    el.set_inner_html(&html);
}
