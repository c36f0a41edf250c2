//! Per-method forwarding generation.
//!
//! Each source method becomes a final public method with the same
//! signature, guarded by the predicate:
//!
//! ```java
//! public final int getCount() {
//!   if (!predicate( Methods.GETCOUNT )) {
//!     throw new UnsupportedOperationException("cannot call getCount");
//!   }
//!   return this.inner.getCount();
//! }
//! ```
//!
//! The guard body is the veto path: the default-return fragment resolved
//! from the method's yield policy, or a bare return for void methods. The
//! forwarding path delegates to the wrapped instance, optionally routed
//! through the after-call hook.

use tracing::debug;

use super::{mimic, to_constant_name, ClassGenerator, MethodError, AFTER_CALL, METHODS, PREDICATE};
use crate::model::{MethodDescriptor, TypeRef, YieldSpec};
use crate::spec::{MethodSpec, Modifier};

impl<'a> ClassGenerator<'a> {
    pub(super) fn create_method(
        &mut self,
        descriptor: &MethodDescriptor,
    ) -> Result<MethodSpec, MethodError> {
        let method_name = descriptor.name.as_str();
        self.register_method_name(method_name);

        if self.config.debug {
            debug!(method = method_name, "generating forwarding method");
        }

        let mut builder = MethodSpec::method(method_name);
        builder.add_modifier(Modifier::Public);
        builder.add_modifier(Modifier::Final);

        // copy the method's own metadata, minus the reserved markers
        mimic::mimic_method_annotations(&mut builder, descriptor, &self.mirror);

        let yield_marker = descriptor.yield_marker();
        let after_marker = descriptor.after_call_marker();

        let has_return = !descriptor.return_type.is_void();
        builder.set_returns(descriptor.return_type.clone());

        let arguments = mimic::mimic_parameters(&mut builder, descriptor, &self.mirror);
        mimic::mimic_throws(&mut builder, descriptor);

        if yield_marker.is_some() && !has_return {
            return Err(MethodError::YieldOnVoid {
                owner: self.source.qualified_name.clone(),
                name: method_name.to_string(),
            });
        }

        let constant = format!("{}.{}", METHODS, to_constant_name(method_name));
        let guard_args = if arguments.is_empty() {
            String::new()
        } else {
            format!(", {}", arguments)
        };
        builder
            .code
            .begin_control_flow(format!("if (!{}( {}{} ))", PREDICATE, constant, guard_args));

        if has_return {
            let policy = match yield_marker {
                Some(policy) => {
                    builder.code.add_comment(format!(
                        "veto default: value = {:?}, adapter = {}",
                        policy.value, policy.adapter
                    ));
                    policy
                }
                None => YieldSpec::default(),
            };
            self.create_yield_part(&mut builder, &descriptor.return_type, method_name, &policy);
        } else {
            builder.code.add_statement("return");
        }

        builder.code.end_control_flow();

        let forward = format!("this.inner.{}({})", method_name, arguments);
        if !after_marker {
            if has_return {
                builder.code.add_statement(format!("return {}", forward));
            } else {
                builder.code.add_statement(forward);
            }
        } else {
            self.after_calls = true;

            if has_return {
                builder.code.add_statement(format!(
                    "return {}({}, {})",
                    AFTER_CALL, constant, forward
                ));
            } else {
                // no result to transform; notify the hook with a null
                // placeholder after the side effect completed
                builder.code.add_statement(forward);
                builder
                    .code
                    .add_statement(format!("{}(\"{}\", null)", AFTER_CALL, method_name));
            }
        }

        Ok(builder)
    }

    /// Resolve the veto-path default value through the policy registry.
    fn create_yield_part(
        &self,
        builder: &mut MethodSpec,
        return_type: &TypeRef,
        method_name: &str,
        policy: &YieldSpec,
    ) {
        self.registry.resolve(
            &policy.adapter,
            return_type,
            &policy.value,
            method_name,
            &mut builder.code,
        );
    }
}
