use crate::locator::{Selector, attr, class_name, css, factory, id, tag_name, xpath};
use crate::set::LocatorSet;

/// Complete locator table for VS Code 1.37.0.
pub(super) fn locators() -> LocatorSet {
    let mut set = workbench();
    set.overlay(&activity_bar());
    set.overlay(&side_bar());
    set.overlay(&editor());
    set.overlay(&bottom_bar());
    set.overlay(&status_bar());
    set.overlay(&title_bar());
    set.overlay(&notifications());
    set.overlay(&menus());
    set.overlay(&input());
    set.overlay(&scm());
    set.overlay(&debug());
    set
}

fn workbench() -> LocatorSet {
    locator_set! {
        "Workbench" => {
            "constructor": class_name("monaco-workbench"),
            "notificationContainer": class_name("notification-toast-container"),
            "notificationItem": class_name("monaco-list-row"),
        },
        "AbstractElement" => {
            "enabled": attr("disabled"),
            "selectedAttr": attr("aria-selected"),
            "selectedClass": attr("selected"),
            "focusedClass": attr("focused"),
        },
    }
}

fn activity_bar() -> LocatorSet {
    locator_set! {
        "ActivityBar" => {
            "constructor": id("workbench.parts.activitybar"),
            "viewContainer": xpath(".//ul[@aria-label='Active View Switcher']"),
            "label": attr("aria-label"),
            "actionsContainer": xpath(".//ul[@aria-label='Manage']"),
            "actionItem": class_name("action-item"),
        },
        "ViewControl" => {
            "attribute": attr("class"),
            "klass": attr("checked"),
            "badge": class_name("badge"),
            "debugBtn": class_name("debug-action-button"),
        },
        "ActionsControl" => {
            "actionLabel": class_name("action-label"),
        },
    }
}

fn side_bar() -> LocatorSet {
    locator_set! {
        "SideBarView" => {
            "constructor": id("workbench.parts.sidebar"),
        },
        "ViewTitlePart" => {
            "constructor": class_name("composite"),
            "title": tag_name("h2"),
            "action": class_name("action-item"),
            "actionLabel": attr("title"),
            "actionConstructor": factory(title_action),
        },
        "ViewContent" => {
            "constructor": class_name("content"),
            "progress": class_name("monaco-progress-container"),
            "section": class_name("split-view-view"),
            "defaultView": class_name("explorer-folders-view"),
            "extensionsView": class_name("extensions-list"),
        },
        "ViewSection" => {
            "title": class_name("title"),
            "titleText": attr("title"),
            "header": class_name("panel-header"),
            "headerExpanded": attr("aria-expanded"),
            "actions": class_name("actions"),
            "button": tag_name("a"),
            "buttonLabel": attr("title"),
            "level": attr("aria-level"),
            "index": attr("data-index"),
            "itemLabel": attr("aria-label"),
            "itemRow": class_name("monaco-list-row"),
        },
        "TreeItem" => {
            "actions": class_name("actions-container"),
            "actionLabel": class_name("action-label"),
            "actionTitle": attr("title"),
            "twistie": class_name("monaco-tl-twistie"),
        },
    }
}

fn editor() -> LocatorSet {
    locator_set! {
        "EditorView" => {
            "constructor": id("workbench.parts.editor"),
            "editorGroup": class_name("editor-group-container"),
            "settingsEditor": id("workbench.editor.settings2"),
            "webView": id("WebviewEditor"),
            "diffEditor": class_name("monaco-diff-editor"),
            "tab": class_name("tab"),
            "closeTab": class_name("tab-close"),
            "tabLabel": attr("aria-label"),
            "tabTitle": attr("title"),
            "actionContainer": class_name("editor-actions"),
            "actionItem": class_name("action-label"),
        },
        "Editor" => {
            "constructor": class_name("editor-instance"),
            "inputArea": class_name("inputarea"),
            "title": class_name("label-name"),
        },
        "TextEditor" => {
            "activeTab": css("div.tab.active"),
            "breakpoint": css(".codicon-debug-breakpoint"),
            "editorContainer": class_name("monaco-editor"),
            "dirty": class_name("dirty"),
            "formatDoc": attr("Format Document"),
            "marginArea": class_name("margin-view-overlays"),
            "selection": css(".cslr.selected-text"),
        },
        "FindWidget" => {
            "constructor": class_name("find-widget"),
            "toggleReplace": xpath(".//div[@title=\"Toggle Replace mode\"]"),
            "replacePart": class_name("replace-part"),
            "findPart": class_name("find-part"),
            "matchCount": class_name("matchesCount"),
            "input": tag_name("textarea"),
            "button": factory(find_widget_button),
            "checkbox": factory(find_widget_checkbox),
        },
    }
}

fn bottom_bar() -> LocatorSet {
    locator_set! {
        "BottomBarPanel" => {
            "constructor": id("workbench.parts.panel"),
            "globalActions": class_name("title-actions"),
            "action": factory(panel_action),
            "actions": class_name("panel-switcher-container"),
            "closeAction": class_name("codicon-panel-close"),
            "problemsTab": attr("Problems"),
            "outputTab": attr("Output"),
            "debugTab": attr("Debug Console"),
            "terminalTab": attr("Terminal"),
            "maximize": attr("Maximize Panel Size"),
            "restore": attr("Restore Panel Size"),
        },
        "BottomBarViews" => {
            "outputChannels": css("select[title='Output Channels']"),
            "xtermContainer": class_name("xterm-helper-textarea"),
            "terminalSelect": css("select[title='Open Terminals.']"),
        },
    }
}

fn status_bar() -> LocatorSet {
    locator_set! {
        "StatusBar" => {
            "constructor": id("workbench.parts.statusbar"),
            "language": id("status.editor.mode"),
            "lines": id("status.editor.selection"),
            "encoding": id("status.editor.encoding"),
            "indent": id("status.editor.indentation"),
            "selectBox": class_name("quick-input-widget"),
            "item": class_name("statusbar-item"),
            "itemTitle": attr("title"),
            "bell": id("status.notifications"),
            "openNotifications": xpath(".//a[starts-with(@title, 'Notifications')]"),
        },
    }
}

fn title_bar() -> LocatorSet {
    locator_set! {
        "TitleBar" => {
            "constructor": id("workbench.parts.titlebar"),
            "itemConstructor": factory(title_bar_item),
            "itemElement": class_name("menubar-menu-button"),
            "itemLabel": attr("aria-label"),
            "title": class_name("window-title"),
        },
        "WindowControls" => {
            "constructor": class_name("window-controls-container"),
            "minimize": class_name("window-minimize"),
            "maximize": class_name("window-max-restore"),
            "close": class_name("window-close"),
        },
    }
}

fn notifications() -> LocatorSet {
    locator_set! {
        "Notification" => {
            "message": class_name("notification-list-item-message"),
            "icon": class_name("notification-list-item-icon"),
            "source": class_name("notification-list-item-source"),
            "progress": class_name("monaco-progress-container"),
            "dismiss": class_name("clear-notification-action"),
            "expand": class_name("toggle-notification-action"),
            "actions": class_name("notification-list-item-buttons-container"),
            "action": class_name("monaco-button"),
            "actionLabel": attr("title"),
        },
        "NotificationsCenter" => {
            "constructor": class_name("notifications-center"),
            "close": class_name("hide-all-notifications-action"),
            "clear": class_name("clear-all-notifications-action"),
            "row": class_name("monaco-list-row"),
        },
    }
}

fn menus() -> LocatorSet {
    locator_set! {
        "ContextMenu" => {
            "contextView": class_name("context-view"),
            "constructor": class_name("monaco-menu-container"),
            "itemConstructor": factory(context_menu_item),
            "itemElement": class_name("action-item"),
            "itemLabel": class_name("action-label"),
            "itemText": attr("aria-label"),
            "itemNesting": class_name("submenu-indicator"),
            "viewBlock": class_name("context-view-block"),
        },
        "MenuBar" => {
            "constructor": class_name("menubar"),
            "itemElement": class_name("menubar-menu-button"),
        },
    }
}

fn input() -> LocatorSet {
    locator_set! {
        "Input" => {
            "inputBox": class_name("monaco-inputbox"),
            "input": class_name("input"),
            "quickList": class_name("quick-input-list"),
            "titleBar": class_name("quick-input-titlebar"),
            "title": class_name("quick-input-title"),
            "backButton": xpath(".//a[@title='Back']"),
            "multiSelectIndex": factory(multi_select_index),
            "quickPickIndex": factory(tree_item_index),
            "quickPickPosition": factory(tree_item_position),
            "quickPickLabel": class_name("label-name"),
            "quickPickDescription": class_name("label-description"),
            "quickPickSelectAll": class_name("quick-input-check-all"),
            "busy": class_name("quick-input-progress"),
            "message": class_name("quick-input-message"),
            "details": class_name("quick-input-action"),
            "emptyBox": class_name("quick-input-list-entry"),
            "field": id("workbench.parts.editor"),
        },
        "InputBox" => {
            "constructor": class_name("quick-input-widget"),
        },
        "QuickOpenBox" => {
            "constructor": class_name("monaco-quick-open-widget"),
            "progress": class_name("monaco-progress-container"),
            "quickList": class_name("quick-open-tree"),
            "row": xpath(".//div[@role='treeitem']"),
        },
    }
}

fn scm() -> LocatorSet {
    locator_set! {
        "ScmView" => {
            "providerHeader": css("div[class=\"panel-header\"]"),
            "providerTitle": class_name("title"),
            "providerType": class_name("type"),
            "action": class_name("action-label"),
            "actionConstructor": factory(scm_action),
            "actionLabel": attr("title"),
            "inputField": tag_name("textarea"),
            "changeItem": xpath(".//div[@role='treeitem']"),
            "changeName": class_name("name"),
            "changeCount": class_name("monaco-count-badge"),
            "changeLabel": class_name("label-name"),
            "changeDesc": class_name("label-description"),
            "resource": class_name("resource"),
            "changes": xpath(".//div[@role='treeitem' and .//div[text()='Changes']]"),
            "stagedChanges": xpath(".//div[@role='treeitem' and .//div[text()='Staged Changes']]"),
            "expand": class_name("monaco-tl-twistie"),
            "more": class_name("toolbar-toggle-more"),
            "multiMore": class_name("codicon-more"),
            "multiScmProvider": class_name("scm-provider"),
        },
    }
}

fn debug() -> LocatorSet {
    locator_set! {
        "DebugToolbar" => {
            "constructor": class_name("debug-toolbar"),
            "button": factory(debug_toolbar_button),
        },
        "DebugView" => {
            "launchCombo": class_name("start-debug-action-item"),
            "launchSelect": class_name("monaco-select-box"),
            "launchOption": class_name("monaco-list-row"),
            "optionByName": factory(option_by_name),
            "startButton": class_name("codicon-debug-start"),
        },
    }
}

// Factories

fn title_action(title: &str) -> Selector {
    xpath(format!(".//a[@title='{title}']"))
}

fn find_widget_button(title: &str) -> Selector {
    xpath(format!(".//div[@role='button' and starts-with(@title, '{title}')]"))
}

fn find_widget_checkbox(title: &str) -> Selector {
    xpath(format!(".//div[@role='checkbox' and starts-with(@title, '{title}')]"))
}

fn panel_action(label: &str) -> Selector {
    xpath(format!(".//a[starts-with(@title, '{label}')]"))
}

fn title_bar_item(label: &str) -> Selector {
    xpath(format!(".//div[@aria-label=\"{label}\"]"))
}

fn context_menu_item(label: &str) -> Selector {
    xpath(format!(".//a[starts-with(@aria-label, '{label}')]"))
}

fn multi_select_index(index: &str) -> Selector {
    xpath(format!(".//div[@role='treeitem' and @data-index='{index}']/div/label"))
}

fn tree_item_index(index: &str) -> Selector {
    xpath(format!(".//div[@role='treeitem' and @data-index='{index}']"))
}

fn tree_item_position(position: &str) -> Selector {
    xpath(format!(".//div[@role='treeitem' and @aria-posinset='{position}']"))
}

fn scm_action(title: &str) -> Selector {
    xpath(format!(".//a[@title='{title}']"))
}

fn debug_toolbar_button(name: &str) -> Selector {
    class_name(format!("codicon-debug-{name}"))
}

fn option_by_name(name: &str) -> Selector {
    xpath(format!("./option[@value='{name}']"))
}
