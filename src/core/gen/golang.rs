use core::gen::{
    ActionsInterfaceNode, BaseStateClassNode, EventMethodNode, FsmClassNode, Node,
    StateClassNode, StateEventMethodNode, StateInterfaceNode, Visitor,
};

/// Go Implementer: Renders a node tree as Go source. Method and type names
/// are title-cased; raw state and event names survive only inside string
/// literals, where the unhandled-transition callback reports them.
pub struct GoImplementer {
    package: String,
    result: String,
}

impl GoImplementer {
    pub fn new(package: &str) -> Self {
        GoImplementer {
            package: package.to_string(),
            result: String::new(),
        }
    }

    pub fn implement(&mut self, node: &Node) -> String {
        self.result = String::new();

        if !self.package.is_empty() {
            self.result.push_str(&format!("package {}\n", self.package));
        }

        node.accept(self);
        self.result.clone()
    }

    fn push_line(&mut self, line: &str) {
        self.result.push_str(line);
        self.result.push('\n');
    }
}

impl Visitor for GoImplementer {
    fn visit_state_interface(&mut self, node: &StateInterfaceNode) {
        let class_name = title(&node.fsm_class_name);

        self.push_line("");
        self.push_line("type State interface {");
        for event in &node.events {
            self.push_line(&format!("  {}(fsm *{})", title(event), class_name));
        }
        self.push_line("}");
    }

    fn visit_actions_interface(&mut self, node: &ActionsInterfaceNode) {
        self.push_line("");
        self.push_line("type Actions interface {");
        for action in &node.actions {
            self.push_line(&format!("  {}()", title(action)));
        }
        self.push_line("  UnhandledTransition(state string, event string)");
        self.push_line("}");
    }

    fn visit_fsm_class(&mut self, node: &FsmClassNode) {
        let class_name = title(&node.class_name);

        self.push_line("");
        self.push_line(&format!("type {} struct {{", class_name));
        self.push_line("  State State");
        self.push_line("  Actions Actions");
        self.push_line("}");
        self.push_line("");
        self.push_line(&format!(
            "func New{}(actions Actions) *{} {{",
            class_name, class_name
        ));
        self.push_line(&format!("  return &{}{{", class_name));
        self.push_line("    Actions: actions,");
        self.push_line(&format!("    State: NewState{}(),", title(&node.initial_state)));
        self.push_line("  }");
        self.push_line("}");

        for method in &node.event_methods {
            method.accept(self);
        }
    }

    fn visit_event_method(&mut self, node: &EventMethodNode) {
        let class_name = title(&node.class_name);
        let event_name = title(&node.event_name);

        self.push_line("");
        self.push_line(&format!(
            "func (f *{}) {}() {{",
            class_name, event_name
        ));
        self.push_line(&format!("  f.State.{}(f)", event_name));
        self.push_line("}");
    }

    fn visit_base_state_class(&mut self, node: &BaseStateClassNode) {
        let class_name = title(&node.fsm_class_name);

        self.push_line("");
        self.push_line("type BaseState struct {");
        self.push_line("  StateName string");
        self.push_line("}");

        for event in &node.events {
            self.push_line("");
            self.push_line(&format!(
                "func (b BaseState) {}(fsm *{}) {{",
                title(event),
                class_name
            ));
            self.push_line(&format!(
                "  fsm.Actions.UnhandledTransition(b.StateName, \"{}\")",
                event
            ));
            self.push_line("}");
        }
    }

    fn visit_state_class(&mut self, node: &StateClassNode) {
        let state_name = title(&node.state_name);

        self.push_line("");
        self.push_line(&format!("type State{} struct {{", state_name));
        self.push_line("  BaseState");
        self.push_line("}");
        self.push_line("");
        self.push_line(&format!(
            "func NewState{}() State{} {{",
            state_name, state_name
        ));
        self.push_line(&format!(
            "  return State{}{{BaseState{{StateName: \"{}\"}}}}",
            state_name, node.state_name
        ));
        self.push_line("}");

        for method in &node.event_methods {
            method.accept(self);
        }
    }

    fn visit_state_event_method(&mut self, node: &StateEventMethodNode) {
        self.push_line("");
        self.push_line(&format!(
            "func (s State{}) {}(fsm *{}) {{",
            title(&node.state_name),
            title(&node.event_name),
            title(&node.fsm_class_name)
        ));

        if !node.next_state.is_empty() {
            self.push_line(&format!(
                "  fsm.State = NewState{}()",
                title(&node.next_state)
            ));
        }

        for action in &node.actions {
            self.push_line(&format!("  fsm.Actions.{}()", title(action)));
        }

        self.push_line("}");
    }
}

fn title(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
