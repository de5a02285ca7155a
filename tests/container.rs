use podi::{component, utils::thread_safety::RcThreadSafety, BeanScope, Config, Container};

#[derive(Default)]
struct OrderRepository;

#[derive(Default)]
struct OrderService {
    order_repository: Option<RcThreadSafety<OrderRepository>>,
}

#[derive(Default)]
struct UserService {
    order_service: Option<RcThreadSafety<OrderService>>,
}

component!(OrderRepository in "app.services");
component! {
    OrderService in "app.services" {
        inject order_repository: OrderRepository,
    }
}
component! {
    UserService in "app.services" {
        inject order_service: OrderService,
    }
}

#[derive(Default)]
struct RequestContext;

#[derive(Default)]
struct RequestHandler {
    request_context: Option<RcThreadSafety<RequestContext>>,
    user_service: Option<RcThreadSafety<UserService>>,
}

component!(RequestContext in "app.services", scope = "prototype");
component! {
    RequestHandler in "app.services", scope = "prototype" {
        inject request_context: RequestContext,
        inject user_service: UserService,
    }
}

fn container() -> Container {
    Container::new(Config::with_scan_root("app.services")).unwrap()
}

#[test]
fn test_singleton_get_is_identity_preserving() {
    let container = container();

    let first = container.get("userService").unwrap();
    let second = container.get("userService").unwrap();

    assert!(RcThreadSafety::ptr_eq(&first, &second));
}

#[test]
fn test_injected_field_is_the_shared_singleton() {
    let container = container();

    let user_service = container.get_typed::<UserService>("userService").unwrap();
    let order_service = container.get_typed::<OrderService>("orderService").unwrap();

    let injected = user_service.order_service.as_ref().unwrap();
    assert!(RcThreadSafety::ptr_eq(injected, &order_service));
}

#[test]
fn test_transitive_wiring() {
    let container = container();

    let user_service = container.get_typed::<UserService>("userService").unwrap();
    let order_repository = container.get_typed::<OrderRepository>("orderRepository").unwrap();

    let order_service = user_service.order_service.as_ref().unwrap();
    let injected_repository = order_service.order_repository.as_ref().unwrap();
    assert!(RcThreadSafety::ptr_eq(injected_repository, &order_repository));
}

#[test]
fn test_prototype_get_returns_fresh_instances() {
    let container = container();

    let first = container.get("requestContext").unwrap();
    let second = container.get("requestContext").unwrap();

    assert!(!RcThreadSafety::ptr_eq(&first, &second));
}

#[test]
fn test_prototype_bean_with_mixed_dependencies() {
    let container = container();

    let first = container.get_typed::<RequestHandler>("requestHandler").unwrap();
    let second = container.get_typed::<RequestHandler>("requestHandler").unwrap();

    // the prototype dependency is constructed per handler
    let first_context = first.request_context.as_ref().unwrap();
    let second_context = second.request_context.as_ref().unwrap();
    assert!(!RcThreadSafety::ptr_eq(first_context, second_context));

    // the singleton dependency is shared across handlers
    let first_service = first.user_service.as_ref().unwrap();
    let second_service = second.user_service.as_ref().unwrap();
    assert!(RcThreadSafety::ptr_eq(first_service, second_service));
}

#[test]
fn test_definition_metadata() {
    let container = container();

    let mut names = container.bean_names();
    names.sort();
    assert_eq!(
        names,
        ["orderRepository", "orderService", "requestContext", "requestHandler", "userService"],
    );

    assert!(BeanScope::from_marker(Some("prototype")).is_prototype());
    assert!(BeanScope::from_marker(None).is_singleton());
}
