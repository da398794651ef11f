//! Clip-OCR: OCR the clipboard image with a global shortcut.

mod app;
mod app_command;
mod bootstrap;
mod clipboard_handler;
mod config;
mod error;
mod hotkey_handler;
mod logging;
mod tray_manager;
mod ui_bridge;
mod ui_command;

pub(crate) use {
    app::App,
    app_command::AppCommand,
    clipboard_handler::ClipboardHandler,
    error::{AppError, Result as AppResult},
    hotkey_handler::HotkeyHandler,
    tray_manager::TrayManager,
    ui_bridge::{TrayStatus, UiClipboard},
    ui_command::UiCommand,
};

use crate::{
    bootstrap::{EXIT_STARTUP_FAILED, Startup},
    config::Config,
};

use clip_ocr_core::{CredentialSources, GeminiOcrClient, InvocationGate, ShortcutFlow};

use std::process::ExitCode;

use global_hotkey::GlobalHotKeyManager;
use tao::{
    event::{Event, StartCause},
    event_loop::{ControlFlow, EventLoopBuilder},
};
use tokio::sync::{mpsc, watch};
use tracing::{error, warn};

/// Application entry point.
fn main() -> ExitCode {
    logging::init(logging::log_dir().as_deref());

    // Nothing is registered or shown until the credential is known.
    let startup = match Startup::prepare(&CredentialSources::from_env(), Config::load) {
        Ok(startup) => startup,
        Err(e) => {
            error!(error = %e, "Startup failed");
            return ExitCode::from(bootstrap::exit_status(&e));
        }
    };

    #[cfg_attr(not(target_os = "macos"), allow(unused_mut))]
    let mut event_loop = EventLoopBuilder::<UiCommand>::with_user_event().build();

    // Menu-bar accessory: no Dock icon, no app menu.
    #[cfg(target_os = "macos")]
    {
        use tao::platform::macos::{ActivationPolicy, EventLoopExtMacOS};
        event_loop.set_activation_policy(ActivationPolicy::Accessory);
    }

    let ui_proxy = event_loop.create_proxy();

    // TrayIcon is !Send, so the marker and the clipboard stay here.
    let mut tray_manager = TrayManager::new();
    let mut clipboard = match ClipboardHandler::new() {
        Ok(handler) => handler,
        Err(e) => {
            error!(error = %e, "Failed to create ClipboardHandler");
            return ExitCode::from(EXIT_STARTUP_FAILED);
        }
    };

    // Dropping the manager unregisters the shortcut.
    let mut hotkey_manager: Option<GlobalHotKeyManager> = None;
    let mut startup = Some(startup);

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::UserEvent(cmd) => {
                handle_ui_command(cmd, &mut tray_manager, &mut clipboard, control_flow);
                return;
            }
            Event::NewEvents(StartCause::Init) => {
                let Some(startup) = startup.take() else {
                    return;
                };

                // Registration needs the main thread's run loop.
                let (manager, hotkey_id) = match HotkeyHandler::register_hotkey(
                    startup.hotkey,
                    &startup.config.shortcut.binding,
                ) {
                    Ok(pair) => pair,
                    Err(e) => {
                        error!("Failed to register hotkey: {:?}", e);
                        std::process::exit(i32::from(EXIT_STARTUP_FAILED));
                    }
                };
                hotkey_manager = Some(manager);

                #[cfg(target_os = "macos")]
                unsafe {
                    use core_foundation::runloop::{CFRunLoopGetMain, CFRunLoopWakeUp};
                    CFRunLoopWakeUp(CFRunLoopGetMain());
                }

                let flow = ShortcutFlow::new(
                    UiClipboard::new(ui_proxy.clone()),
                    GeminiOcrClient::with_options(
                        startup.credential,
                        startup.config.ocr.to_options(),
                    ),
                    TrayStatus::new(ui_proxy.clone()),
                )
                .with_dwell(startup.config.status.dwell());

                let (command_tx, command_rx) = mpsc::channel(32);
                let (shutdown_tx, shutdown_rx) = watch::channel(false);
                let ui_proxy = ui_proxy.clone();

                std::thread::spawn(move || {
                    let rt = match tokio::runtime::Runtime::new() {
                        Ok(rt) => rt,
                        Err(e) => {
                            error!("Failed to create tokio runtime: {:?}", e);
                            std::process::exit(i32::from(EXIT_STARTUP_FAILED));
                        }
                    };

                    rt.block_on(async {
                        let hotkey_handler = HotkeyHandler::new(hotkey_id, command_tx);

                        let app = App {
                            flow: InvocationGate::new(flow),
                            ui_proxy,
                            command_rx,
                            shutdown_tx,
                        };

                        tokio::join!(
                            async {
                                if let Err(e) = hotkey_handler.run(shutdown_rx).await {
                                    error!(error = ?e, "Hotkey handler error");
                                }
                            },
                            async {
                                if let Err(e) = app.run().await {
                                    error!(error = ?e, "App error");
                                }
                            }
                        );
                    });
                });
            }
            _ => {}
        }

        // Keeps the registration alive for the life of the loop.
        let _ = &hotkey_manager;
    })
}

/// Apply a command from the runtime thread. Runs on the main thread.
fn handle_ui_command(
    cmd: UiCommand,
    tray_manager: &mut TrayManager,
    clipboard: &mut ClipboardHandler,
    control_flow: &mut ControlFlow,
) {
    match cmd {
        UiCommand::ShowStatus(state) => {
            if let Err(e) = tray_manager.show(state) {
                error!(error = ?e, "Failed to update tray marker");
            }
        }
        UiCommand::ClearStatus => tray_manager.clear(),
        UiCommand::ReadClipboardImage { reply } => {
            if reply.send(clipboard.read_image()).is_err() {
                warn!("Clipboard read requester went away");
            }
        }
        UiCommand::WriteClipboardText { text, reply } => {
            if reply.send(clipboard.write_text(&text)).is_err() {
                warn!("Clipboard write requester went away");
            }
        }
        UiCommand::Shutdown => {
            tray_manager.clear();
            *control_flow = ControlFlow::ExitWithCode(0);
        }
    }
}
