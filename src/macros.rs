/// Declares a type as a scannable component.
///
/// Registers the type under the given dotted package path so a container
/// scanning that path picks it up. Options come in fixed order after the
/// package: `name` (explicit bean name), `scope` (raw scope payload,
/// normalized at definition time), `construct` (fallible constructor used
/// instead of [`Default`]). A trailing block lists the fields the container
/// must populate; each must have type `Option<RcThreadSafety<Dep>>`.
///
/// The setters are generated in the invoking scope, so the fields may be
/// private as long as the macro is invoked in the module declaring the type.
///
/// ```rust
/// use podi::{component, utils::thread_safety::RcThreadSafety, Config, Container};
///
/// #[derive(Default)]
/// struct OrderService;
///
/// #[derive(Default)]
/// struct UserService {
///     order_service: Option<RcThreadSafety<OrderService>>,
/// }
///
/// component!(OrderService in "docs.quickstart");
/// component! {
///     UserService in "docs.quickstart" {
///         inject order_service: OrderService,
///     }
/// }
///
/// let container = Container::new(Config::with_scan_root("docs.quickstart")).unwrap();
/// let user_service = container.get_typed::<UserService>("userService").unwrap();
/// assert!(user_service.order_service.is_some());
/// ```
#[macro_export]
macro_rules! component {
    (
        $ty:ident in $package:literal
        $(, name = $name:literal)?
        $(, scope = $scope:literal)?
        $(, construct = $construct:path)?
        $({ $(inject $field:ident: $dep:ty),* $(,)? })?
        $(;)?
    ) => {
        const _: () = {
            static __INJECTORS: &[$crate::Injector] = &[$($(
                $crate::component_internal!(@injector $ty, $field, $dep)
            ),*)?];

            fn __load() -> ::core::result::Result<$crate::TypeHandle, $crate::LoadErrorKind> {
                ::core::result::Result::Ok($crate::TypeHandle::component(
                    $crate::TypeInfo::of::<$ty>(),
                    $crate::ComponentMeta {
                        name: $crate::component_internal!(@marker $($name)?),
                        scope: $crate::component_internal!(@marker $($scope)?),
                        constructor: $crate::component_internal!(@constructor $ty $(, $construct)?),
                        injectors: __INJECTORS,
                    },
                ))
            }

            #[$crate::scan::distributed_slice($crate::scan::TYPE_ENTRIES)]
            #[linkme(crate = $crate::scan::linkme)]
            static __TYPE_ENTRY: $crate::TypeEntry = $crate::TypeEntry {
                package: $package,
                type_name: ::core::stringify!($ty),
                load: __load,
            };
        };
    };
}

/// Declares a scannable type that is *not* a component.
///
/// The scanner returns its handle alongside the components under the same
/// package; registry population filters it out.
#[macro_export]
macro_rules! scanned_type {
    ($ty:ident in $package:literal $(;)?) => {
        const _: () = {
            fn __load() -> ::core::result::Result<$crate::TypeHandle, $crate::LoadErrorKind> {
                ::core::result::Result::Ok($crate::TypeHandle::plain($crate::TypeInfo::of::<$ty>()))
            }

            #[$crate::scan::distributed_slice($crate::scan::TYPE_ENTRIES)]
            #[linkme(crate = $crate::scan::linkme)]
            static __TYPE_ENTRY: $crate::TypeEntry = $crate::TypeEntry {
                package: $package,
                type_name: ::core::stringify!($ty),
                load: __load,
            };
        };
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! component_internal {
    (@marker) => {
        ::core::option::Option::None
    };
    (@marker $val:literal) => {
        ::core::option::Option::Some($val)
    };

    (@constructor $ty:ty) => {{
        fn __construct() -> ::core::result::Result<
            $crate::utils::thread_safety::BoxedAnyThreadSafety,
            $crate::InstantiateErrorKind,
        > {
            ::core::result::Result::Ok($crate::macros_utils::boxed_bean::<$ty>(
                <$ty as ::core::default::Default>::default(),
            ))
        }
        __construct
    }};
    (@constructor $ty:ty, $construct:path) => {{
        fn __construct() -> ::core::result::Result<
            $crate::utils::thread_safety::BoxedAnyThreadSafety,
            $crate::InstantiateErrorKind,
        > {
            match $construct() {
                ::core::result::Result::Ok(bean) => {
                    ::core::result::Result::Ok($crate::macros_utils::boxed_bean::<$ty>(bean))
                }
                ::core::result::Result::Err(err) => ::core::result::Result::Err(err),
            }
        }
        __construct
    }};

    (@injector $ty:ty, $field:ident, $dep:ty) => {{
        fn __dependency_type_info() -> $crate::TypeInfo {
            $crate::TypeInfo::of::<$dep>()
        }

        fn __assign(
            target: &mut dyn ::core::any::Any,
            dependency: $crate::utils::thread_safety::RcAnyThreadSafety,
        ) -> ::core::result::Result<(), $crate::InjectErrorKind> {
            let ::core::option::Option::Some(target) = target.downcast_mut::<$ty>() else {
                return ::core::result::Result::Err($crate::InjectErrorKind::TargetTypeMismatch {
                    expected: $crate::TypeInfo::of::<$ty>(),
                });
            };

            match dependency.downcast::<$dep>() {
                ::core::result::Result::Ok(dependency) => {
                    target.$field = ::core::option::Option::Some(dependency);
                    ::core::result::Result::Ok(())
                }
                ::core::result::Result::Err(_) => {
                    ::core::result::Result::Err($crate::InjectErrorKind::DependencyTypeMismatch {
                        expected: $crate::TypeInfo::of::<$dep>(),
                    })
                }
            }
        }

        $crate::Injector::from_parts(__dependency_type_info, __assign)
    }};
}
