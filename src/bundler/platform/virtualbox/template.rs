//! Built-in Vagrantfile template.

/// Pins the box's base MAC so the guest does not re-detect its NIC on
/// first boot.
pub const DEFAULT_VAGRANTFILE: &str = r#"
Vagrant.configure("2") do |config|
  config.vm.base_mac = "{{ .BaseMacAddress }}"
end
"#;
