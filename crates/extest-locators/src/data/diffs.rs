use crate::locator::{Selector, attr, class_name, css, factory, id, xpath};
use crate::set::LocatorSet;

/// Every release that changed workbench markup, oldest first.
pub(super) const DIFFS: &[(&str, fn() -> LocatorSet)] = &[
    ("1.38.0", v1_38),
    ("1.39.0", v1_39),
    ("1.40.0", v1_40),
    ("1.41.0", v1_41),
    ("1.43.0", v1_43),
    ("1.44.0", v1_44),
    ("1.45.0", v1_45),
    ("1.47.0", v1_47),
    ("1.49.0", v1_49),
    ("1.50.0", v1_50),
    ("1.52.0", v1_52),
    ("1.54.0", v1_54),
    ("1.56.0", v1_56),
    ("1.58.0", v1_58),
    ("1.61.0", v1_61),
    ("1.66.0", v1_66),
    ("1.73.0", v1_73),
    ("1.76.0", v1_76),
    ("1.81.0", v1_81),
    ("1.85.0", v1_85),
    ("1.87.0", v1_87),
];

fn v1_38() -> LocatorSet {
    locator_set! {
        "ViewSection" => {
            "header": class_name("pane-header"),
        },
    }
}

fn v1_39() -> LocatorSet {
    locator_set! {
        "BottomBarViews" => {
            "terminalSelect": css("select[title='Open Terminals']"),
        },
    }
}

fn v1_40() -> LocatorSet {
    locator_set! {
        "ViewControl" => {
            "klass": attr("active"),
        },
        "BottomBarPanel" => {
            "closeAction": class_name("codicon-close"),
        },
    }
}

fn v1_41() -> LocatorSet {
    locator_set! {
        "Notification" => {
            "expand": class_name("codicon-chevron-up"),
        },
    }
}

fn v1_43() -> LocatorSet {
    locator_set! {
        "ContextMenu" => {
            "itemConstructor": factory(context_menu_item_title),
        },
    }
}

fn v1_44() -> LocatorSet {
    locator_set! {
        "Input" => {
            "quickPickIndex": factory(list_row_index),
            "quickPickPosition": factory(list_row_position),
            "multiSelectIndex": factory(list_row_checkbox),
        },
        "QuickOpenBox" => {
            "row": xpath(".//div[@role='option']"),
        },
    }
}

fn v1_45() -> LocatorSet {
    locator_set! {
        "DebugToolbar" => {
            "button": factory(debug_toolbar_codicon),
        },
    }
}

fn v1_47() -> LocatorSet {
    locator_set! {
        "ScmView" => {
            "providerHeader": css("div.scm-provider"),
        },
    }
}

fn v1_49() -> LocatorSet {
    locator_set! {
        "ScmView" => {
            "providerHeader": xpath(".//div[@role='treeitem' and .//div[contains(@class, 'scm-provider')]]"),
            "providerTitle": class_name("name"),
            "inputField": class_name("inputarea"),
        },
    }
}

fn v1_50() -> LocatorSet {
    locator_set! {
        "TitleBar" => {
            "itemConstructor": factory(title_bar_item_by_label),
        },
        "NotificationsCenter" => {
            "close": class_name("codicon-notifications-hide"),
            "clear": class_name("codicon-notifications-clear-all"),
        },
        "Notification" => {
            "dismiss": class_name("codicon-notifications-clear"),
        },
    }
}

fn v1_52() -> LocatorSet {
    locator_set! {
        "BottomBarPanel" => {
            "closeAction": class_name("codicon-panel-close"),
        },
        "EditorView" => {
            "webView": css("div.webview"),
        },
    }
}

fn v1_54() -> LocatorSet {
    locator_set! {
        "ActivityBar" => {
            "viewContainer": xpath(".//div[@role='tablist' and @aria-label='Active View Switcher']"),
            "actionsContainer": xpath(".//div[@role='toolbar' and @aria-label='Manage']"),
        },
        "ViewControl" => {
            "klass": attr("checked"),
        },
    }
}

fn v1_56() -> LocatorSet {
    locator_set! {
        "BottomBarViews" => {
            "outputChannels": css("select[title='Output Channel']"),
        },
        "EditorView" => {
            "settingsEditor": css("div.settings-editor"),
        },
    }
}

fn v1_58() -> LocatorSet {
    locator_set! {
        "StatusBar" => {
            "itemTitle": attr("aria-label"),
            "openNotifications": class_name("codicon-bell"),
        },
    }
}

fn v1_61() -> LocatorSet {
    locator_set! {
        "BottomBarViews" => {
            "terminalSelect": xpath(".//ul[@aria-label='Terminal tabs']"),
        },
    }
}

fn v1_66() -> LocatorSet {
    locator_set! {
        "BottomBarPanel" => {
            "action": factory(panel_action_by_label),
        },
    }
}

fn v1_73() -> LocatorSet {
    locator_set! {
        "ViewSection" => {
            "buttonLabel": attr("aria-label"),
        },
        "ViewTitlePart" => {
            "actionConstructor": factory(title_action_by_label),
        },
    }
}

fn v1_76() -> LocatorSet {
    locator_set! {
        "Input" => {
            "quickPickIndex": factory(option_index),
            "quickPickPosition": factory(option_position),
        },
    }
}

fn v1_81() -> LocatorSet {
    locator_set! {
        "Editor" => {
            "inputArea": class_name("native-edit-context"),
        },
        "ActivityBar" => {
            "actionItem": xpath(".//li[@role='tab' or @role='button']"),
        },
    }
}

fn v1_85() -> LocatorSet {
    locator_set! {
        "Workbench" => {
            "notificationItem": xpath(".//div[contains(@class, 'monaco-list-row') and @role='dialog']"),
        },
        "NotificationsCenter" => {
            "row": xpath(".//div[contains(@class, 'monaco-list-row') and @role='dialog']"),
        },
    }
}

fn v1_87() -> LocatorSet {
    locator_set! {
        "TitleBar" => {
            "title": class_name("window-title-text"),
        },
    }
}

// Factories

fn context_menu_item_title(label: &str) -> Selector {
    xpath(format!(".//a[starts-with(@title, '{label}')]"))
}

fn list_row_index(index: &str) -> Selector {
    css(format!(".monaco-list-row[data-index='{index}']"))
}

fn list_row_position(position: &str) -> Selector {
    css(format!(".monaco-list-row[aria-posinset='{position}']"))
}

fn list_row_checkbox(index: &str) -> Selector {
    css(format!(".monaco-list-row[data-index='{index}'] .quick-input-list-checkbox"))
}

fn debug_toolbar_codicon(name: &str) -> Selector {
    css(format!(".action-label.codicon-debug-{name}"))
}

fn title_bar_item_by_label(label: &str) -> Selector {
    xpath(format!(".//div[@role='menuitem' and @aria-label='{label}']"))
}

fn panel_action_by_label(label: &str) -> Selector {
    xpath(format!(".//a[starts-with(@aria-label, '{label}')]"))
}

fn title_action_by_label(label: &str) -> Selector {
    xpath(format!(".//a[@aria-label='{label}']"))
}

fn option_index(index: &str) -> Selector {
    xpath(format!(".//div[@role='option' and @data-index='{index}']"))
}

fn option_position(position: &str) -> Selector {
    xpath(format!(".//div[@role='option' and @aria-posinset='{position}']"))
}
